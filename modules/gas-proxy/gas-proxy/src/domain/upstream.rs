//! Outbound seam towards the Apps Script backend.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use thiserror::Error;

use super::envelope::UpstreamEnvelope;

/// Raw reply from the upstream, before any interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    /// Reason phrase reported alongside `status`.
    pub status_text: String,
    pub body: Bytes,
}

impl UpstreamReply {
    /// Reply whose reason phrase is the canonical one for `status`.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body: body.into(),
        }
    }
}

/// Transport-level failure: the upstream never produced a reply.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct UpstreamError(pub String);

/// Sends one envelope to the upstream backend.
///
/// Implementations make exactly one attempt. The proxy bounds the call with
/// its own timeout and drops the future when it fires.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when no HTTP reply could be obtained.
    async fn send(&self, envelope: &UpstreamEnvelope) -> Result<UpstreamReply, UpstreamError>;
}
