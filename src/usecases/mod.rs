//! Application use cases. Orchestrate domain logic via ports.

pub mod contact_service;
pub mod portfolio_service;

pub use contact_service::ContactService;
pub use portfolio_service::PortfolioService;
