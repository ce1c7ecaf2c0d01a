//! Mock Relay
//!
//! For local development without email credentials, and for tests.
//! Records every message instead of sending it.

use async_trait::async_trait;
use catalog_core::{CatalogError, MessageRelay, OutboundMessage};
use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crate::error::RelayError;

/// In-memory relay that records messages
#[derive(Default)]
pub struct MockRelay {
    sent: Mutex<Vec<OutboundMessage>>,
    failing: AtomicBool,
}

impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose sends always fail
    pub fn failing() -> Self {
        let relay = Self::new();
        relay.set_failing(true);
        relay
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages recorded so far
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MessageRelay for MockRelay {
    async fn send(&self, message: &OutboundMessage) -> catalog_core::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::from(RelayError::Simulated(
                "mock relay set to fail".into(),
            )));
        }

        tracing::debug!(to = %message.to_email, subject = %message.subject, "mock relay recorded message");
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
