//! Configuration for the GAS proxy.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Upstream calls give up after this long unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Proxy configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GasProxyConfig {
    /// Absolute URL of the Apps Script web-app deployment.
    pub upstream_url: String,

    /// Path prefix the hosting platform mounts the proxy under.
    pub mount_prefix: String,

    /// Bound on the single upstream call, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GasProxyConfig {
    fn default() -> Self {
        Self {
            upstream_url: String::new(),
            mount_prefix: "/api".to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("proxy.upstream_url is not set")]
    MissingUpstreamUrl,

    #[error("proxy.upstream_url '{url}' is not a valid URL: {source}")]
    InvalidUpstreamUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("proxy.upstream_url must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("proxy.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build upstream HTTP client: {0}")]
    HttpClient(String),
}

impl GasProxyConfig {
    /// Parse and check the upstream URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty, unparseable, or not `http(s)`.
    pub fn upstream_url(&self) -> Result<Url, ConfigError> {
        let raw = self.upstream_url.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingUpstreamUrl);
        }
        let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUpstreamUrl {
            url: raw.to_owned(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_owned())),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Duration::from_secs(self.request_timeout_secs))
    }

    /// Mount prefix with a leading `/` and no trailing `/`; empty means root.
    #[must_use]
    pub fn normalized_mount_prefix(&self) -> String {
        normalize_prefix(&self.mount_prefix)
    }
}

pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
