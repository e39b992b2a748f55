//! Failure taxonomy of the proxy and its HTTP mapping.

use http::{Method, StatusCode};
use serde_json::{Value, json};
use thiserror::Error;

/// How much of a non-JSON upstream body is echoed back in `details`.
const INVALID_RESPONSE_DETAILS_CHARS: usize = 200;

/// Every way a proxied request can fail.
///
/// The `Display` text is the `error` field of the response body.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Invalid JSON in request body")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    #[error("Request timeout - GAS API took too long to respond")]
    Timeout,

    #[error("GAS API Error: {} {status_text}", .status.as_u16())]
    UpstreamStatus {
        status: StatusCode,
        status_text: String,
    },

    #[error("Invalid response from GAS API")]
    InvalidUpstreamResponse { details: String },

    #[error("Internal server error")]
    Internal { details: String },
}

impl ProxyError {
    /// Build [`ProxyError::InvalidUpstreamResponse`] from the raw upstream body.
    #[must_use]
    pub fn invalid_upstream_response(raw_body: &[u8]) -> Self {
        let details = String::from_utf8_lossy(raw_body)
            .chars()
            .take(INVALID_RESPONSE_DETAILS_CHARS)
            .collect();
        Self::InvalidUpstreamResponse { details }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) | Self::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamStatus { status, .. } => *status,
            Self::InvalidUpstreamResponse { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::InvalidUpstreamResponse { details } | Self::Internal { details } => {
                Some(details)
            }
            _ => None,
        }
    }

    /// `{success:false, error, details?}`
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        if let (Some(details), Some(obj)) = (self.details(), body.as_object_mut()) {
            obj.insert("details".to_owned(), Value::String(details.to_owned()));
        }
        body
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_maps_to_400() {
        let err = ProxyError::InvalidJson(serde_json::from_str::<Value>("{bad").unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_body(),
            json!({"success": false, "error": "Invalid JSON in request body"})
        );
    }

    #[test]
    fn timeout_maps_to_504() {
        let err = ProxyError::Timeout;
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            err.to_body()["error"],
            "Request timeout - GAS API took too long to respond"
        );
    }

    #[test]
    fn upstream_status_is_relayed() {
        let err = ProxyError::UpstreamStatus {
            status: StatusCode::NOT_FOUND,
            status_text: "Not Found".to_owned(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_body()["error"], "GAS API Error: 404 Not Found");
        assert!(err.to_body().get("details").is_none());
    }

    #[test]
    fn invalid_upstream_response_truncates_details() {
        let raw = "x".repeat(500);
        let err = ProxyError::invalid_upstream_response(raw.as_bytes());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        let body = err.to_body();
        assert_eq!(body["error"], "Invalid response from GAS API");
        assert_eq!(body["details"].as_str().unwrap().chars().count(), 200);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let raw = "\u{00e9}".repeat(300);
        let err = ProxyError::invalid_upstream_response(raw.as_bytes());
        assert_eq!(err.details().unwrap().chars().count(), 200);
    }

    #[test]
    fn internal_error_carries_message() {
        let err = ProxyError::Internal {
            details: "connection refused".to_owned(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_body(),
            json!({
                "success": false,
                "error": "Internal server error",
                "details": "connection refused",
            })
        );
    }

    #[test]
    fn unsupported_method_maps_to_400() {
        let err = ProxyError::UnsupportedMethod(Method::PATCH);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_body()["error"], "Unsupported HTTP method: PATCH");
    }
}
