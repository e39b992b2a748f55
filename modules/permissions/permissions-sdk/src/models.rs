//! Domain models for the permissions module.
//!
//! The vocabulary is closed: four roles, six resources, four capabilities.
//! Lookups by string never fail at the resolver level; parsing helpers here
//! return typed errors so callers can tell "unrecognized" apart from "denied".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownResource, UnknownRole};

/// Actor class assigned at authentication time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Customer,
}

impl Role {
    /// All recognized roles, in matrix order.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Manager, Self::Staff, Self::Customer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles are matched on their exact lowercase identifier.
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

/// Protected noun the matrix grants capabilities on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Complaints,
    Users,
    Reports,
    Settings,
    Analytics,
    Permissions,
}

impl Resource {
    /// All protected resources, in matrix order.
    pub const ALL: [Self; 6] = [
        Self::Complaints,
        Self::Users,
        Self::Reports,
        Self::Settings,
        Self::Analytics,
        Self::Permissions,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complaints => "Complaints",
            Self::Users => "Users",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::Analytics => "Analytics",
            Self::Permissions => "Permissions",
        }
    }

    /// Whether `name` refers to this resource, ignoring ASCII case.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource names are matched case-insensitively.
impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.matches(s))
            .ok_or_else(|| UnknownResource(s.to_owned()))
    }
}

/// One of the four operations a role may perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    View,
    Create,
    Edit,
    Delete,
}

impl Capability {
    pub const ALL: [Self; 4] = [Self::View, Self::Create, Self::Edit, Self::Delete];

    const fn bit(self) -> u8 {
        match self {
            Self::View => 0b0001,
            Self::Create => 0b0010,
            Self::Edit => 0b0100,
            Self::Delete => 0b1000,
        }
    }
}

/// Set of granted capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    /// Builds a set from the four flags in matrix column order.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn from_flags(view: bool, create: bool, edit: bool, delete: bool) -> Self {
        let mut bits = 0;
        if view {
            bits |= Capability::View.bit();
        }
        if create {
            bits |= Capability::Create.bit();
        }
        if edit {
            bits |= Capability::Edit.bit();
        }
        if delete {
            bits |= Capability::Delete.bit();
        }
        Self(bits)
    }

    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    #[must_use]
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Capability record for one resource.
///
/// `resource` holds the canonical resource name when the lookup matched a
/// table entry, and the caller's input otherwise. Serialized as
/// `{resource, view, create, edit, delete}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PermissionRecord", from = "PermissionRecord")]
pub struct Permission {
    pub resource: String,
    pub capabilities: Capabilities,
}

impl Permission {
    #[must_use]
    pub fn new(resource: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            resource: resource.into(),
            capabilities,
        }
    }

    /// The all-false record returned for unknown `(role, resource)` pairs.
    #[must_use]
    pub fn denied(resource: impl Into<String>) -> Self {
        Self::new(resource, Capabilities::NONE)
    }

    #[must_use]
    pub const fn allows(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    #[must_use]
    pub const fn can_view(&self) -> bool {
        self.allows(Capability::View)
    }

    #[must_use]
    pub const fn can_create(&self) -> bool {
        self.allows(Capability::Create)
    }

    #[must_use]
    pub const fn can_edit(&self) -> bool {
        self.allows(Capability::Edit)
    }

    #[must_use]
    pub const fn can_delete(&self) -> bool {
        self.allows(Capability::Delete)
    }
}

/// Wire shape of [`Permission`].
#[derive(Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
struct PermissionRecord {
    resource: String,
    view: bool,
    create: bool,
    edit: bool,
    delete: bool,
}

impl From<Permission> for PermissionRecord {
    fn from(p: Permission) -> Self {
        Self {
            view: p.can_view(),
            create: p.can_create(),
            edit: p.can_edit(),
            delete: p.can_delete(),
            resource: p.resource,
        }
    }
}

impl From<PermissionRecord> for Permission {
    fn from(r: PermissionRecord) -> Self {
        Self::new(
            r.resource,
            Capabilities::from_flags(r.view, r.create, r.edit, r.delete),
        )
    }
}
