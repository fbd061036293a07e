//! Contact submission pipeline: validate -> primary send -> mailto fallback.
//!
//! - Validation failures abort before any network call
//! - Exactly one delivery attempt per submission, no retries
//! - Any delivery failure collapses into the fallback transition
//! - Stateless across submissions; at most one submission in flight

use crate::adapters::mailto;
use crate::domain::{validation, ContactSubmission, DeliveryOutcome, DomainError};
use crate::ports::{DeliveryPort, MailClientPort};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Delivery pipeline. Constructed with injected ports — no globals.
pub struct ContactService {
    delivery: Arc<dyn DeliveryPort>,
    mail_client: Arc<dyn MailClientPort>,
    recipient: String,
    /// Submit control. Set while a submission runs, cleared at either
    /// terminal state.
    in_flight: AtomicBool,
}

impl ContactService {
    pub fn new(
        delivery: Arc<dyn DeliveryPort>,
        mail_client: Arc<dyn MailClientPort>,
        recipient: String,
    ) -> Self {
        Self {
            delivery,
            mail_client,
            recipient,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one submission through the pipeline.
    ///
    /// Returns the terminal [`DeliveryOutcome`], or
    /// `DomainError::Validation` before any network call. `Busy` if a
    /// submission is already running. No cancellation: once started, the
    /// pipeline runs to a terminal state.
    pub async fn submit(
        &self,
        candidate: ContactSubmission,
    ) -> Result<DeliveryOutcome, DomainError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DomainError::Busy);
        }
        let result = self.run_pipeline(candidate).await;
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn run_pipeline(
        &self,
        candidate: ContactSubmission,
    ) -> Result<DeliveryOutcome, DomainError> {
        debug!("validating submission");
        let submission = validation::validate(&candidate)?;

        debug!(from = %submission.email, "attempting primary delivery");
        match self.delivery.send(&submission).await {
            Ok(()) => {
                info!(from = %submission.email, "submission delivered");
                Ok(DeliveryOutcome::Sent)
            }
            Err(e) => {
                // Cause is logged only; the user sees the fallback as an
                // informational flow, never as an error.
                warn!(error = %e, "delivery failed, falling back to mail client");
                let uri = mailto::compose_uri(&self.recipient, &submission);
                self.mail_client.open(&uri).await?;
                info!("mail client invoked for fallback");
                Ok(DeliveryOutcome::FallbackRequired)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::MockDelivery;
    use crate::domain::ValidationError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// Records every URI handed to the host mail-client handler.
    #[derive(Default)]
    struct RecordingMailClient {
        uris: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MailClientPort for RecordingMailClient {
        async fn open(&self, uri: &str) -> Result<(), DomainError> {
            self.uris.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    /// Blocks in send() until released, so tests can observe an in-flight
    /// submission.
    struct BlockingDelivery {
        started: Notify,
        release: Notify,
    }

    impl BlockingDelivery {
        fn new() -> Self {
            Self {
                started: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl DeliveryPort for BlockingDelivery {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), DomainError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(())
        }
    }

    fn ada() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    fn service(
        delivery: Arc<dyn DeliveryPort>,
        mail: Arc<RecordingMailClient>,
    ) -> ContactService {
        ContactService::new(delivery, mail, "owner@example.com".to_string())
    }

    #[tokio::test]
    async fn test_valid_submission_delivers_once() {
        let delivery = Arc::new(MockDelivery::succeeding());
        let mail = Arc::new(RecordingMailClient::default());
        let svc = service(delivery.clone(), mail.clone());

        let outcome = svc.submit(ada()).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::Sent);
        assert_eq!(delivery.calls(), 1);
        assert!(mail.uris.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_falls_back_to_mail_client() {
        let delivery = Arc::new(MockDelivery::failing());
        let mail = Arc::new(RecordingMailClient::default());
        let svc = service(delivery.clone(), mail.clone());

        let outcome = svc.submit(ada()).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::FallbackRequired);
        assert_eq!(delivery.calls(), 1);

        let uris = mail.uris.lock().unwrap();
        assert_eq!(uris.len(), 1);
        assert!(uris[0].starts_with("mailto:owner@example.com?subject="));
        assert!(uris[0].contains("Ada"));
        assert!(uris[0].contains("ada%40example.com"));
        assert!(uris[0].contains("Hi"));
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_network_call() {
        let delivery = Arc::new(MockDelivery::succeeding());
        let mail = Arc::new(RecordingMailClient::default());
        let svc = service(delivery.clone(), mail.clone());

        let mut missing_name = ada();
        missing_name.name = "  ".to_string();
        let err = svc.submit(missing_name).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::MissingName)
        ));

        let mut bad_email = ada();
        bad_email.email = "not-an-email".to_string();
        let err = svc.submit(bad_email).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::MalformedEmail)
        ));

        assert_eq!(delivery.calls(), 0);
        assert!(mail.uris.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_uninitialized_delivery_is_just_a_failure() {
        // "Not initialized" and "rejected" are deliberately merged: both
        // end in the fallback transition.
        let delivery = Arc::new(MockDelivery::failing());
        let mail = Arc::new(RecordingMailClient::default());
        let svc = service(delivery, mail.clone());

        let outcome = svc.submit(ada()).await.unwrap();
        assert_eq!(outcome, DeliveryOutcome::FallbackRequired);
        assert_eq!(mail.uris.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_guard_released_after_terminal_states() {
        let mail = Arc::new(RecordingMailClient::default());
        let svc = service(Arc::new(MockDelivery::succeeding()), mail.clone());
        assert_eq!(svc.submit(ada()).await.unwrap(), DeliveryOutcome::Sent);
        assert_eq!(svc.submit(ada()).await.unwrap(), DeliveryOutcome::Sent);

        let svc = service(Arc::new(MockDelivery::failing()), mail.clone());
        assert_eq!(
            svc.submit(ada()).await.unwrap(),
            DeliveryOutcome::FallbackRequired
        );
        assert_eq!(
            svc.submit(ada()).await.unwrap(),
            DeliveryOutcome::FallbackRequired
        );
    }

    #[tokio::test]
    async fn test_second_concurrent_submission_is_busy() {
        let delivery = Arc::new(BlockingDelivery::new());
        let mail = Arc::new(RecordingMailClient::default());
        let svc = Arc::new(service(delivery.clone(), mail));

        let first = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.submit(ada()).await })
        };
        delivery.started.notified().await;

        let second = svc.submit(ada()).await;
        assert!(matches!(second, Err(DomainError::Busy)));

        delivery.release.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome, DeliveryOutcome::Sent);
    }
}
