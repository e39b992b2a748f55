//! GAS proxy module.
//!
//! Browsers cannot call the Apps Script backend directly, and the backend only
//! understands one shape of request: a `POST` carrying `{path, action, data}`.
//! This crate turns any REST call under a mount prefix into that envelope,
//! forwards it once with a bounded wait, and maps the outcome back onto HTTP
//! with a fixed CORS header set.
//!
//! - [`GasProxy`] - request handling and error mapping
//! - [`UpstreamClient`] - outbound seam; [`infra::ReqwestUpstream`] in production
//! - [`api::router`] - axum routes for the mount prefix

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use config::{ConfigError, GasProxyConfig};
pub use domain::{
    GasProxy, ProxyError, ProxyRequest, ProxyResponse, UpstreamAction, UpstreamClient,
    UpstreamEnvelope, UpstreamError, UpstreamReply, api_path,
};
