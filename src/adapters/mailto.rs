//! Mail-client fallback. Composes a `mailto:` URI from a submission and
//! hands it to the host environment's registered handler.

use crate::domain::{ContactSubmission, DomainError};
use crate::ports::MailClientPort;
use async_trait::async_trait;
use tracing::info;

/// Compose the fallback URI for a submission.
///
/// Subject and body are percent-encoded; the body keeps the CRLF layout
/// mail clients expect for line breaks.
pub fn compose_uri(recipient: &str, submission: &ContactSubmission) -> String {
    let subject = format!("Portfolio Contact from {}", submission.name);
    let body = format!(
        "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
        submission.name, submission.email, submission.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Opens URIs with the platform opener. Fire-and-forget: the spawned
/// handler is not awaited.
pub struct SystemMailClient;

/// Platform opener command and its leading arguments.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        // `start` needs an explicit (empty) window title before the URI.
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

#[async_trait]
impl MailClientPort for SystemMailClient {
    async fn open(&self, uri: &str) -> Result<(), DomainError> {
        let (cmd, args) = opener();
        info!(command = cmd, "invoking mail-client handler");
        tokio::process::Command::new(cmd)
            .args(args)
            .arg(uri)
            .spawn()
            .map_err(|e| DomainError::MailClient(format!("failed to launch {}: {}", cmd, e)))?;
        Ok(())
    }
}
