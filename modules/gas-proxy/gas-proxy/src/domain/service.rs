use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::Method;
use serde::de::IgnoredAny;

use super::envelope::{ProxyRequest, UpstreamEnvelope};
use super::error::ProxyError;
use super::response::ProxyResponse;
use super::upstream::UpstreamClient;
use crate::config::{ConfigError, GasProxyConfig, normalize_prefix};
use crate::infra::ReqwestUpstream;

/// Request normalizer and proxy.
///
/// Stateless per request: one envelope out, one bounded upstream call, one
/// response back. Safe to share behind an `Arc` across concurrent requests.
pub struct GasProxy {
    upstream: Arc<dyn UpstreamClient>,
    timeout: Duration,
    mount_prefix: String,
}

impl GasProxy {
    #[must_use]
    pub fn new(upstream: Arc<dyn UpstreamClient>, timeout: Duration) -> Self {
        Self {
            upstream,
            timeout,
            mount_prefix: String::new(),
        }
    }

    #[must_use]
    pub fn with_mount_prefix(mut self, prefix: &str) -> Self {
        self.mount_prefix = normalize_prefix(prefix);
        self
    }

    /// Build a proxy talking to the configured upstream over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the upstream URL or timeout is invalid,
    /// or the HTTP client cannot be constructed.
    pub fn from_config(cfg: &GasProxyConfig) -> Result<Self, ConfigError> {
        let url = cfg.upstream_url()?;
        let timeout = cfg.request_timeout()?;
        tracing::info!(
            upstream = %url,
            timeout_secs = timeout.as_secs(),
            mount_prefix = %cfg.normalized_mount_prefix(),
            "Configured GAS proxy"
        );
        let upstream = Arc::new(ReqwestUpstream::new(url)?);
        Ok(Self::new(upstream, timeout).with_mount_prefix(&cfg.mount_prefix))
    }

    #[must_use]
    pub fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }

    /// Handle one inbound request end to end.
    #[tracing::instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn handle(&self, request: ProxyRequest) -> ProxyResponse {
        if request.method == Method::OPTIONS {
            return ProxyResponse::preflight();
        }

        match self.forward(&request).await {
            Ok(body) => ProxyResponse::ok(body),
            Err(err) => {
                log_failure(&err);
                ProxyResponse::from_error(&err)
            }
        }
    }

    async fn forward(&self, request: &ProxyRequest) -> Result<Bytes, ProxyError> {
        let envelope = UpstreamEnvelope::from_request(request)?;
        tracing::debug!(action = envelope.action.as_str(), "Forwarding envelope upstream");

        // Dropping the send future on timeout cancels the in-flight call.
        let reply = tokio::time::timeout(self.timeout, self.upstream.send(&envelope))
            .await
            .map_err(|_| ProxyError::Timeout)?
            .map_err(|e| ProxyError::Internal { details: e.0 })?;

        if !reply.status.is_success() {
            return Err(ProxyError::UpstreamStatus {
                status: reply.status,
                status_text: reply.status_text,
            });
        }

        // Validate only; the body is relayed byte for byte.
        serde_json::from_slice::<IgnoredAny>(&reply.body)
            .map_err(|_| ProxyError::invalid_upstream_response(&reply.body))?;
        Ok(reply.body)
    }
}

fn log_failure(err: &ProxyError) {
    match err {
        ProxyError::InvalidJson(_) | ProxyError::UnsupportedMethod(_) => {
            tracing::debug!(error = %err, "Rejected request before forwarding");
        }
        ProxyError::Timeout
        | ProxyError::UpstreamStatus { .. }
        | ProxyError::InvalidUpstreamResponse { .. } => {
            tracing::warn!(status = %err.status(), error = %err, "GAS API call failed");
        }
        ProxyError::Internal { details } => {
            tracing::error!(error = %details, "GAS proxy transport failure");
        }
    }
}
