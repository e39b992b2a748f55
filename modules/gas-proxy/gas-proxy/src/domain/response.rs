//! Outbound response model.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};

use super::error::ProxyError;

/// The header set attached to every proxy response, success or failure.
#[must_use]
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(4);
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, X-Requested-With"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Response produced for one proxied request.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Serialized JSON; `None` for the empty preflight body.
    pub body: Option<Bytes>,
}

impl ProxyResponse {
    /// `200` with no body, answered locally.
    #[must_use]
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            headers: cors_headers(),
            body: None,
        }
    }

    /// `200` relaying the upstream JSON bytes as received.
    #[must_use]
    pub fn ok(body: Bytes) -> Self {
        Self {
            status: StatusCode::OK,
            headers: cors_headers(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn from_error(err: &ProxyError) -> Self {
        Self {
            status: err.status(),
            headers: cors_headers(),
            body: Some(Bytes::from(err.to_body().to_string())),
        }
    }

    /// Body bytes; empty for the preflight response.
    #[must_use]
    pub fn body_bytes(&self) -> Bytes {
        self.body.clone().unwrap_or_default()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cors_headers_are_complete() {
        let headers = cors_headers();
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert!(
            headers[ACCESS_CONTROL_ALLOW_HEADERS]
                .to_str()
                .unwrap()
                .contains("Content-Type")
        );
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn preflight_has_empty_body() {
        let resp = ProxyResponse::preflight();
        assert_eq!(resp.status, StatusCode::OK);
        assert!(resp.body.is_none());
        assert!(resp.body_bytes().is_empty());
        assert_eq!(resp.headers, cors_headers());
    }

    #[test]
    fn error_response_uses_error_status_and_headers() {
        let resp = ProxyResponse::from_error(&ProxyError::Timeout);
        assert_eq!(resp.status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(resp.headers, cors_headers());
        let body: serde_json::Value = serde_json::from_slice(&resp.body.unwrap()).unwrap();
        assert_eq!(body["success"], json!(false));
    }

    #[test]
    fn ok_keeps_body_bytes_verbatim() {
        let raw = Bytes::from_static(br#"{"z":1, "a":1.10}"#);
        let resp = ProxyResponse::ok(raw.clone());
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body_bytes(), raw);
    }
}
