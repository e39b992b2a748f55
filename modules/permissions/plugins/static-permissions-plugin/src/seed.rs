//! Settings-store seed generated from the default matrix.

use permissions_sdk::{Permission, Role};
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_PERMISSIONS;

/// One `(role, resource)` row, serialized as
/// `{role, resource, view, create, edit, delete}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSeedRow {
    pub role: Role,
    #[serde(flatten)]
    pub permission: Permission,
}

/// Flatten [`DEFAULT_PERMISSIONS`] into seed rows, role-major.
#[must_use]
pub fn permission_seed() -> Vec<PermissionSeedRow> {
    DEFAULT_PERMISSIONS
        .iter()
        .flat_map(|table| {
            table
                .entries
                .iter()
                .map(move |(resource, capabilities)| PermissionSeedRow {
                    role: table.role,
                    permission: Permission::new(resource.as_str(), *capabilities),
                })
        })
        .collect()
}
