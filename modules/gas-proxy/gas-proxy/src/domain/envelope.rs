//! Inbound request model and the upstream envelope derived from it.

use std::collections::BTreeMap;

use bytes::Bytes;
use http::{Method, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ProxyError;

/// Inbound request as seen by the proxy, after mount-prefix stripping.
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub method: Method,
    /// Logical API path, always starting with `/`.
    pub path: String,
    pub query: BTreeMap<String, String>,
    /// Raw body; `None` when the request carried no bytes.
    pub body: Option<Bytes>,
}

impl ProxyRequest {
    /// Build a request from HTTP parts, stripping `mount_prefix` from the path.
    ///
    /// Repeated query keys keep their last value.
    #[must_use]
    pub fn from_parts(method: Method, uri: &Uri, mount_prefix: &str, body: Bytes) -> Self {
        let query = uri
            .query()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self {
            method,
            path: api_path(mount_prefix, uri.path()),
            query,
            body: (!body.is_empty()).then_some(body),
        }
    }
}

/// Strip the platform mount prefix from `raw_path`.
///
/// The prefix only matches on a segment boundary, so `/api` strips from
/// `/api/complaints` but not from `/apiary`. The result always starts with `/`.
#[must_use]
pub fn api_path(mount_prefix: &str, raw_path: &str) -> String {
    let prefix = crate::config::normalize_prefix(mount_prefix);
    let rest = match raw_path.strip_prefix(prefix.as_str()) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => raw_path,
    };

    if rest.starts_with('/') {
        rest.to_owned()
    } else {
        format!("/{rest}")
    }
}

/// Canonical action understood by the upstream backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamAction {
    Get,
    Create,
    Update,
    Delete,
}

impl UpstreamAction {
    /// Map an inbound HTTP verb onto an upstream action.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::UnsupportedMethod`] for anything other than
    /// `GET`, `POST`, `PUT` or `DELETE`.
    pub fn from_method(method: &Method) -> Result<Self, ProxyError> {
        match *method {
            Method::GET => Ok(Self::Get),
            Method::POST => Ok(Self::Create),
            Method::PUT => Ok(Self::Update),
            Method::DELETE => Ok(Self::Delete),
            _ => Err(ProxyError::UnsupportedMethod(method.clone())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// The `{path, action, data}` body every upstream call carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamEnvelope {
    pub path: String,
    pub action: UpstreamAction,
    pub data: Value,
}

impl UpstreamEnvelope {
    /// Derive the envelope for `request`.
    ///
    /// `data` is the query map for `GET` and the parsed body otherwise; a
    /// missing body becomes an empty object.
    ///
    /// # Errors
    ///
    /// - [`ProxyError::UnsupportedMethod`] for verbs with no upstream action
    /// - [`ProxyError::InvalidJson`] when a non-`GET` body is not JSON
    pub fn from_request(request: &ProxyRequest) -> Result<Self, ProxyError> {
        let action = UpstreamAction::from_method(&request.method)?;

        let data = match (action, &request.body) {
            (UpstreamAction::Get, _) => Value::Object(
                request
                    .query
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
            (_, Some(body)) => serde_json::from_slice(body).map_err(ProxyError::InvalidJson)?,
            (_, None) => Value::Object(serde_json::Map::new()),
        };

        Ok(Self {
            path: request.path.clone(),
            action,
            data,
        })
    }
}
