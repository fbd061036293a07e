//! Infrastructure adapters. Implement outbound ports.
//!
//! EmailJS, mail client, content document, terminal UI. Map errors to
//! DomainError.

pub mod content;
pub mod email;
pub mod mailto;
pub mod ui;
