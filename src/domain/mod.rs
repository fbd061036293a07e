//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod validation;

pub use entities::{
    Certification, ContactSubmission, DeliveryOutcome, Personal, PortfolioData, Project, Skill,
    SocialLink,
};
pub use errors::DomainError;
pub use validation::ValidationError;
