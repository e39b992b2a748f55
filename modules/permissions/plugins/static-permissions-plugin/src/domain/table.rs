//! The compiled-in role/resource capability matrix.
//!
//! This is the only copy of the default permissions. The resolver reads it
//! directly and the settings-store seed is generated from it.

use permissions_sdk::{Capabilities, Resource, Role};

/// Ordered capability entries for one role.
#[derive(Debug, Clone, Copy)]
pub struct RolePermissions {
    pub role: Role,
    pub entries: [(Resource, Capabilities); 6],
}

const ALL: Capabilities = Capabilities::ALL;
const NONE: Capabilities = Capabilities::NONE;
const VIEW: Capabilities = Capabilities::from_flags(true, false, false, false);
const VIEW_CREATE: Capabilities = Capabilities::from_flags(true, true, false, false);
const VIEW_CREATE_EDIT: Capabilities = Capabilities::from_flags(true, true, true, false);

pub const DEFAULT_PERMISSIONS: [RolePermissions; 4] = [
    RolePermissions {
        role: Role::Admin,
        entries: [
            (Resource::Complaints, ALL),
            (Resource::Users, ALL),
            (Resource::Reports, ALL),
            (Resource::Settings, ALL),
            (Resource::Analytics, ALL),
            (Resource::Permissions, ALL),
        ],
    },
    RolePermissions {
        role: Role::Manager,
        entries: [
            (Resource::Complaints, VIEW_CREATE_EDIT),
            (Resource::Users, VIEW),
            (Resource::Reports, VIEW_CREATE),
            (Resource::Settings, VIEW),
            (Resource::Analytics, VIEW),
            (Resource::Permissions, NONE),
        ],
    },
    RolePermissions {
        role: Role::Staff,
        entries: [
            (Resource::Complaints, VIEW_CREATE_EDIT),
            (Resource::Users, NONE),
            (Resource::Reports, VIEW),
            (Resource::Settings, NONE),
            (Resource::Analytics, VIEW),
            (Resource::Permissions, NONE),
        ],
    },
    RolePermissions {
        role: Role::Customer,
        entries: [
            (Resource::Complaints, VIEW_CREATE),
            (Resource::Users, NONE),
            (Resource::Reports, NONE),
            (Resource::Settings, NONE),
            (Resource::Analytics, NONE),
            (Resource::Permissions, NONE),
        ],
    },
];
