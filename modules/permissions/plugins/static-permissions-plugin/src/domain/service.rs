//! Service implementation for the static permission resolver.

use permissions_sdk::{Capability, Permission};

use super::table::{DEFAULT_PERMISSIONS, RolePermissions};

/// Static permission resolver service.
///
/// A pure function of the immutable table and the two string inputs:
/// - the role selects one table by exact identifier
/// - the resource selects one entry, ignoring case
/// - anything unmatched resolves to an all-false record
pub struct Service {
    tables: &'static [RolePermissions],
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: &DEFAULT_PERMISSIONS,
        }
    }

    fn table_for(&self, role: &str) -> Option<&'static RolePermissions> {
        self.tables.iter().find(|table| table.role.as_str() == role)
    }

    /// Resolve the permission record for `role` on `resource`.
    #[must_use]
    pub fn resolve(&self, role: &str, resource: &str) -> Permission {
        let Some(table) = self.table_for(role) else {
            tracing::debug!(role, resource, "unrecognized role, denying all capabilities");
            return Permission::denied(resource);
        };

        table
            .entries
            .iter()
            .find(|(candidate, _)| candidate.matches(resource))
            .map_or_else(
                || Permission::denied(resource),
                |(matched, capabilities)| Permission::new(matched.as_str(), *capabilities),
            )
    }

    /// All records for `role` in table order; empty when the role is unknown.
    #[must_use]
    pub fn permissions_for(&self, role: &str) -> Vec<Permission> {
        self.table_for(role)
            .map(|table| {
                table
                    .entries
                    .iter()
                    .map(|(resource, capabilities)| Permission::new(resource.as_str(), *capabilities))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn can_view(&self, role: &str, resource: &str) -> bool {
        self.resolve(role, resource).allows(Capability::View)
    }

    #[must_use]
    pub fn can_create(&self, role: &str, resource: &str) -> bool {
        self.resolve(role, resource).allows(Capability::Create)
    }

    #[must_use]
    pub fn can_edit(&self, role: &str, resource: &str) -> bool {
        self.resolve(role, resource).allows(Capability::Edit)
    }

    #[must_use]
    pub fn can_delete(&self, role: &str, resource: &str) -> bool {
        self.resolve(role, resource).allows(Capability::Delete)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use permissions_sdk::{Resource, Role};
    use proptest::prelude::*;

    fn all_four(service: &Service, role: &str, resource: &str) -> [bool; 4] {
        [
            service.can_view(role, resource),
            service.can_create(role, resource),
            service.can_edit(role, resource),
            service.can_delete(role, resource),
        ]
    }

    #[test]
    fn admin_has_every_capability_on_every_resource() {
        let service = Service::new();
        for resource in Resource::ALL {
            assert_eq!(
                all_four(&service, "admin", resource.as_str()),
                [true; 4],
                "admin on {resource}"
            );
        }
    }

    #[test]
    fn customer_can_only_view_and_create_complaints() {
        let service = Service::new();
        assert_eq!(
            all_four(&service, "customer", "Complaints"),
            [true, true, false, false]
        );
        for resource in ["Users", "Reports", "Settings", "Analytics", "Permissions"] {
            assert_eq!(
                all_four(&service, "customer", resource),
                [false; 4],
                "customer on {resource}"
            );
        }
    }

    #[test]
    fn manager_and_staff_cannot_delete_complaints() {
        let service = Service::new();
        assert!(service.can_edit("manager", "complaints"));
        assert!(!service.can_delete("manager", "complaints"));
        assert!(service.can_edit("staff", "complaints"));
        assert!(!service.can_delete("staff", "complaints"));
        assert!(service.can_view("manager", "users"));
        assert!(!service.can_view("staff", "users"));
    }

    #[test]
    fn resource_lookup_ignores_case() {
        let service = Service::new();
        let upper = service.resolve("admin", "COMPLAINTS");
        let lower = service.resolve("admin", "complaints");
        assert_eq!(upper, lower);
        assert_eq!(upper.resource, "Complaints");
    }

    #[test]
    fn unknown_role_resolves_to_all_false() {
        let service = Service::new();
        let p = service.resolve("superuser", "Complaints");
        assert_eq!(p, Permission::denied("Complaints"));
        assert!(service.permissions_for("superuser").is_empty());
    }

    #[test]
    fn role_lookup_is_exact() {
        let service = Service::new();
        assert!(!service.can_view("Admin", "Complaints"));
    }

    #[test]
    fn unknown_resource_echoes_requested_name() {
        let service = Service::new();
        let p = service.resolve("admin", "Billing");
        assert_eq!(p.resource, "Billing");
        assert!(p.capabilities.is_empty());
    }

    #[test]
    fn permissions_for_lists_resources_in_table_order() {
        let service = Service::new();
        let names: Vec<String> = service
            .permissions_for("staff")
            .into_iter()
            .map(|p| p.resource)
            .collect();
        let expected: Vec<String> = Resource::ALL.iter().map(|r| r.as_str().to_owned()).collect();
        assert_eq!(names, expected);
    }

    proptest! {
        #[test]
        fn unknown_pairs_grant_nothing(role in "[a-zA-Z]{0,12}", resource in "[a-zA-Z]{0,12}") {
            let service = Service::new();
            let known_role = role.parse::<Role>().is_ok();
            let known_resource = resource.parse::<Resource>().is_ok();
            if !(known_role && known_resource) {
                prop_assert_eq!(all_four(&service, &role, &resource), [false; 4]);
            }
        }

        #[test]
        fn resource_case_never_changes_the_answer(
            role_idx in 0usize..4,
            resource_idx in 0usize..6,
            upper_mask in proptest::collection::vec(any::<bool>(), 11),
        ) {
            let service = Service::new();
            let role = Role::ALL[role_idx].as_str();
            let canonical = Resource::ALL[resource_idx].as_str();
            let mixed: String = canonical
                .chars()
                .zip(upper_mask.iter().chain(std::iter::repeat(&false)))
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            prop_assert_eq!(service.resolve(role, &mixed), service.resolve(role, canonical));
        }
    }
}
