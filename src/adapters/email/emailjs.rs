//! EmailJS adapter. Implements DeliveryPort against the EmailJS REST API.
//!
//! The hosted service transmits the message to the owner's inbox using a
//! pre-created template; this adapter only fills the template parameters.

use crate::domain::{ContactSubmission, DomainError};
use crate::ports::DeliveryPort;
use crate::shared::config::EmailServiceConfig;
use serde::Serialize;
use tracing::{info, warn};

/// EmailJS REST adapter.
///
/// `api_url` is injectable so tests can point it at a local server; the
/// production default lives in `shared::config`.
pub struct EmailJsDelivery {
    client: reqwest::Client,
    api_url: String,
    config: EmailServiceConfig,
}

impl EmailJsDelivery {
    /// Create a new EmailJS adapter.
    ///
    /// # Arguments
    /// * `api_url` - send endpoint (e.g. "https://api.emailjs.com/api/v1.0/email/send")
    /// * `config` - service/template/key credentials plus the recipient
    pub fn new(api_url: String, config: EmailServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            config,
        }
    }
}

/// EmailJS send request structure.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Parameters consumed by the owner's email template.
#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_email: &'a str,
    reply_to: &'a str,
}

#[async_trait::async_trait]
impl DeliveryPort for EmailJsDelivery {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DomainError> {
        // Uninitialized credentials fail without a network call; callers
        // cannot tell this apart from a rejected send.
        if !self.config.is_initialized() {
            warn!("email service not initialized, failing send");
            return Err(DomainError::Delivery(
                "email service not initialized".to_string(),
            ));
        }

        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &submission.name,
                from_email: &submission.email,
                message: &submission.message,
                to_email: &self.config.recipient,
                reply_to: &submission.email,
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Delivery(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "EmailJS returned error");
            return Err(DomainError::Delivery(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        info!(from = %submission.email, "email sent via EmailJS");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn credentials() -> EmailServiceConfig {
        EmailServiceConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            recipient: "owner@example.com".to_string(),
        }
    }

    fn ada() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_template_params() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body_partial(
                    r#"{
                        "service_id": "service_abc",
                        "template_id": "template_xyz",
                        "user_id": "pk_123",
                        "template_params": {
                            "from_name": "Ada",
                            "from_email": "ada@example.com",
                            "message": "Hi",
                            "to_email": "owner@example.com",
                            "reply_to": "ada@example.com"
                        }
                    }"#,
                );
            then.status(200).body("OK");
        });

        let adapter = EmailJsDelivery::new(server.url("/api/v1.0/email/send"), credentials());
        adapter.send(&ada()).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_service_rejection_maps_to_delivery_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(400).body("The user_id parameter is required");
        });

        let adapter = EmailJsDelivery::new(server.url("/api/v1.0/email/send"), credentials());
        let err = adapter.send(&ada()).await.unwrap_err();
        assert!(matches!(err, DomainError::Delivery(_)));
        mock.assert();
    }

    #[tokio::test]
    async fn test_uninitialized_service_fails_without_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(200);
        });

        let placeholders = EmailServiceConfig {
            service_id: "your_service_id".to_string(),
            template_id: "your_template_id".to_string(),
            public_key: "your_public_key".to_string(),
            recipient: "owner@example.com".to_string(),
        };
        let adapter = EmailJsDelivery::new(server.url("/api/v1.0/email/send"), placeholders);
        let err = adapter.send(&ada()).await.unwrap_err();
        assert!(matches!(err, DomainError::Delivery(_)));
        mock.assert_hits(0);
    }
}
