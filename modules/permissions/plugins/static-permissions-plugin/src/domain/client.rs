//! Client implementation for the static permission resolver.

use async_trait::async_trait;
use permissions_sdk::{Permission, PermissionResolverClient};

use super::service::Service;

#[async_trait]
impl PermissionResolverClient for Service {
    async fn resolve(&self, role: &str, resource: &str) -> Permission {
        Service::resolve(self, role, resource)
    }

    async fn permissions_for(&self, role: &str) -> Vec<Permission> {
        Service::permissions_for(self, role)
    }
}
