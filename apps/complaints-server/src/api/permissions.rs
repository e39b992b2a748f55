use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use permissions_sdk::{Permission, PermissionResolverClient};
use serde::Serialize;

type Resolver = Arc<dyn PermissionResolverClient>;

/// Success body shared with the proxied API: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `GET /permissions/{role}` and `GET /permissions/{role}/{resource}`.
#[must_use]
pub fn router(resolver: Resolver) -> Router {
    Router::new()
        .route("/permissions/{role}", get(list_for_role))
        .route("/permissions/{role}/{resource}", get(resolve_one))
        .with_state(resolver)
}

#[tracing::instrument(skip_all, fields(role = %role))]
async fn list_for_role(
    State(resolver): State<Resolver>,
    Path(role): Path<String>,
) -> Json<Envelope<Vec<Permission>>> {
    Json(Envelope::ok(resolver.permissions_for(&role).await))
}

#[tracing::instrument(skip_all, fields(role = %role, resource = %resource))]
async fn resolve_one(
    State(resolver): State<Resolver>,
    Path((role, resource)): Path<(String, String)>,
) -> Json<Envelope<Permission>> {
    Json(Envelope::ok(resolver.resolve(&role, &resource).await))
}
