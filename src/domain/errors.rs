//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

use crate::domain::validation::ValidationError;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Submission rejected before any network call. Surfaced verbatim.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Primary delivery failed. Opaque: transport errors, service
    /// rejections, and an uninitialized service all land here.
    #[error("delivery failed: {0}")]
    Delivery(String),

    #[error("mail client error: {0}")]
    MailClient(String),

    #[error("content document error: {0}")]
    Content(String),

    #[error("input error: {0}")]
    Input(String),

    /// The submit control is disabled while a submission is running.
    #[error("a submission is already in progress")]
    Busy,
}
