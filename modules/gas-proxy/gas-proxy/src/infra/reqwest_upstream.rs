//! HTTP implementation of [`UpstreamClient`] on top of `reqwest`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::ConfigError;
use crate::domain::{UpstreamClient, UpstreamEnvelope, UpstreamError, UpstreamReply};

/// Posts envelopes to a single fixed Apps Script URL.
///
/// No client-level timeout is set; the proxy owns the bound. Redirects are
/// followed, since Apps Script answers deployments through a redirect.
pub struct ReqwestUpstream {
    client: reqwest::Client,
    url: Url,
}

impl ReqwestUpstream {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend fails to initialize.
    pub fn new(url: Url) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstream {
    async fn send(&self, envelope: &UpstreamEnvelope) -> Result<UpstreamReply, UpstreamError> {
        let payload = serde_json::to_vec(envelope).map_err(|e| UpstreamError(e.to_string()))?;

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| UpstreamError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError(e.to_string()))?;

        Ok(UpstreamReply::new(status, body))
    }
}
