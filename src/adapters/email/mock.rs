//! Mock delivery adapter for testing and offline development.
//!
//! Scriptable outcome, simulated latency, recorded call count.

use crate::domain::{ContactSubmission, DomainError};
use crate::ports::DeliveryPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockOutcome {
    Succeed,
    Fail,
}

/// Mock delivery adapter. Never touches the network.
pub struct MockDelivery {
    outcome: MockOutcome,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockDelivery {
    /// Mock that accepts every submission.
    pub fn succeeding() -> Self {
        Self {
            outcome: MockOutcome::Succeed,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that rejects every submission.
    pub fn failing() -> Self {
        Self {
            outcome: MockOutcome::Fail,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Add a simulated network delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of send attempts observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DeliveryPort for MockDelivery {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(from = %submission.email, "[MOCK] simulating delivery");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match self.outcome {
            MockOutcome::Succeed => Ok(()),
            MockOutcome::Fail => Err(DomainError::Delivery(
                "[MOCK] delivery scripted to fail".to_string(),
            )),
        }
    }
}
