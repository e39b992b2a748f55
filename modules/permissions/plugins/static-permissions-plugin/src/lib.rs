#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;
pub mod seed;

pub use domain::{DEFAULT_PERMISSIONS, RolePermissions, Service};
pub use seed::{PermissionSeedRow, permission_seed};
