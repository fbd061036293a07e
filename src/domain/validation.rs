//! Contact form validation. Fixed-order presence checks, then a permissive
//! email syntax check. The first failing check short-circuits; reasons are
//! surfaced to the user verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::ContactSubmission;

/// Permissive shape check: `X@Y.Z` with non-empty parts, no whitespace or
/// extra `@`. Intentionally loose — many odd addresses pass.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Why a submission was rejected. `Display` is the user-facing sentence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please enter your message.")]
    MissingMessage,

    #[error("Please enter a valid email address.")]
    MalformedEmail,
}

/// Validate a candidate submission and return it trimmed.
///
/// Check order is fixed: name presence, email presence, message presence,
/// email syntax. No aggregation of multiple errors.
pub fn validate(candidate: &ContactSubmission) -> Result<ContactSubmission, ValidationError> {
    let name = candidate.name.trim();
    let email = candidate.email.trim();
    let message = candidate.message.trim();

    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
