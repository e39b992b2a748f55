//! Router assembly and the serve loop.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::Method;
use gas_proxy::GasProxy;
use permissions_sdk::PermissionResolverClient;
use static_permissions_plugin::Service as StaticPermissions;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::permissions_router;
use crate::config::AppConfig;

/// Proxy routes under the mount prefix plus the permission lookups.
///
/// The proxy answers its own preflights and sets CORS headers on every
/// reply; the permission routes get theirs from a [`CorsLayer`].
#[must_use]
pub fn build_router(proxy: Arc<GasProxy>, permissions: Arc<dyn PermissionResolverClient>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    gas_proxy::api::router(proxy)
        .merge(permissions_router(permissions).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Build every component from `cfg`, bind, and serve until `shutdown` resolves.
///
/// # Errors
///
/// Fails on invalid proxy settings, when the bind address is unavailable, or
/// when the server loop exits with an I/O error.
pub async fn run<F>(cfg: &AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let proxy = GasProxy::from_config(&cfg.proxy).context("invalid proxy configuration")?;
    let router = build_router(Arc::new(proxy), Arc::new(StaticPermissions::new()));

    let listener = TcpListener::bind(cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    serve(listener, router, shutdown).await
}

/// Serve `router` on an already bound listener.
///
/// # Errors
///
/// Returns the server loop's I/O error.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(%addr, "complaints-server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server loop failed")?;

    tracing::info!("complaints-server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn run_rejects_missing_upstream() {
        let err = run(&AppConfig::default(), async {}).await.unwrap_err();
        assert!(format!("{err:#}").contains("invalid proxy configuration"));
    }
}
