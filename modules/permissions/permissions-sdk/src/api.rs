//! Public API trait for the permission resolver.

use async_trait::async_trait;

use crate::models::{Capability, Permission};

/// Answers capability questions for a `(role, resource)` pair.
///
/// The static plugin implements this over a compiled-in table; a deployment
/// that keeps permissions in a settings store provides its own impl. Absence
/// of data degrades to "no capability", so no method returns an error.
///
/// ```ignore
/// let resolver: Arc<dyn PermissionResolverClient> = Arc::new(Service::new());
///
/// if resolver.can_delete("manager", "complaints").await {
///     // ...
/// }
/// ```
#[async_trait]
pub trait PermissionResolverClient: Send + Sync {
    /// Resolve the permission record for `role` on `resource`.
    ///
    /// `resource` is matched case-insensitively. Unrecognized roles or
    /// resources resolve to an all-false record.
    async fn resolve(&self, role: &str, resource: &str) -> Permission;

    /// Every permission record held for `role`, in table order.
    ///
    /// Empty for an unrecognized role.
    async fn permissions_for(&self, role: &str) -> Vec<Permission>;

    async fn can(&self, role: &str, resource: &str, capability: Capability) -> bool {
        self.resolve(role, resource).await.allows(capability)
    }

    async fn can_view(&self, role: &str, resource: &str) -> bool {
        self.can(role, resource, Capability::View).await
    }

    async fn can_create(&self, role: &str, resource: &str) -> bool {
        self.can(role, resource, Capability::Create).await
    }

    async fn can_edit(&self, role: &str, resource: &str) -> bool {
        self.can(role, resource, Capability::Edit).await
    }

    async fn can_delete(&self, role: &str, resource: &str) -> bool {
        self.can(role, resource, Capability::Delete).await
    }
}
