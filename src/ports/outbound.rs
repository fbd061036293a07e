//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ContactSubmission, DomainError, PortfolioData};

/// Email delivery service. Transmits a contact message to the site
/// owner's inbox. One send per submission; no retries.
#[async_trait::async_trait]
pub trait DeliveryPort: Send + Sync {
    /// Attempt the primary send. Any failure — transport, rejection,
    /// uninitialized service — is `DomainError::Delivery`; callers make no
    /// distinction and fall back to the mail client.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DomainError>;
}

/// Host mail-client boundary. Fallback path when delivery fails.
#[async_trait::async_trait]
pub trait MailClientPort: Send + Sync {
    /// Hand a `mailto:` URI to the host environment's registered handler.
    /// Fire-and-forget: returns once the handler has been invoked.
    async fn open(&self, uri: &str) -> Result<(), DomainError>;
}

/// Static content document source. Read once at startup.
#[async_trait::async_trait]
pub trait ContentPort: Send + Sync {
    /// Read and parse the portfolio document.
    async fn load(&self) -> Result<PortfolioData, DomainError>;
}
