//! axum routes for the proxy.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;

use crate::domain::{GasProxy, ProxyRequest, ProxyResponse};

/// Routes `<prefix>`, `<prefix>/` and `<prefix>/{*path}` for every method to `proxy`.
#[must_use]
pub fn router(proxy: Arc<GasProxy>) -> Router {
    let prefix = proxy.mount_prefix().to_owned();
    let router = Router::new()
        .route(&format!("{prefix}/"), any(proxy_handler))
        .route(&format!("{prefix}/{{*path}}"), any(proxy_handler));

    // An empty prefix mounts at `/`, already routed above.
    let router = if prefix.is_empty() {
        router
    } else {
        router.route(&prefix, any(proxy_handler))
    };
    router.with_state(proxy)
}

async fn proxy_handler(
    State(proxy): State<Arc<GasProxy>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> ProxyResponse {
    let request = ProxyRequest::from_parts(method, &uri, proxy.mount_prefix(), body);
    proxy.handle(request).await
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let body = Body::from(self.body_bytes());
        let mut response = Response::new(body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
