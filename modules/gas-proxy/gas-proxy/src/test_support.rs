//! In-process upstream double for proxy tests.

#![allow(clippy::missing_panics_doc)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{UpstreamClient, UpstreamEnvelope, UpstreamError, UpstreamReply};

/// What the fake does when called.
#[derive(Debug, Clone)]
pub enum FakeBehavior {
    /// Return this reply immediately.
    Reply(UpstreamReply),
    /// Sleep this long, then return `200 {}`.
    Stall(Duration),
    /// Fail at the transport level with this message.
    Fail(String),
}

/// Upstream double that counts calls and records the last envelope.
pub struct FakeUpstream {
    behavior: FakeBehavior,
    calls: AtomicUsize,
    completed: AtomicUsize,
    last_envelope: Mutex<Option<UpstreamEnvelope>>,
}

impl FakeUpstream {
    #[must_use]
    pub fn new(behavior: FakeBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            last_envelope: Mutex::new(None),
        })
    }

    #[must_use]
    pub fn replying(reply: UpstreamReply) -> Arc<Self> {
        Self::new(FakeBehavior::Reply(reply))
    }

    /// Number of calls that started.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of calls that ran to completion.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn last_envelope(&self) -> Option<UpstreamEnvelope> {
        self.last_envelope.lock().clone()
    }
}

#[async_trait]
impl UpstreamClient for FakeUpstream {
    async fn send(&self, envelope: &UpstreamEnvelope) -> Result<UpstreamReply, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_envelope.lock() = Some(envelope.clone());

        let result = match &self.behavior {
            FakeBehavior::Reply(reply) => Ok(reply.clone()),
            FakeBehavior::Stall(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(UpstreamReply::new(http::StatusCode::OK, "{}"))
            }
            FakeBehavior::Fail(message) => Err(UpstreamError(message.clone())),
        };

        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}
