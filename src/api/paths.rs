//! Route table: the contract between pages, handlers, and the guard
//!
//! Logical route keys map to path templates so no caller hand-builds a
//! dashboard URL.

use crate::portfolio::Resource;

pub const HOME: &str = "/dashboard";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const HEALTH: &str = "/health";

/// List page for a collection, e.g. `/dashboard/certificates`
pub fn resource_list(resource: Resource) -> String {
    format!("{}/{}", HOME, resource.path())
}

/// Detail page for one entity
pub fn resource_detail(resource: Resource, id: &str) -> String {
    format!("{}/{}/{}", HOME, resource.path(), id)
}

/// Edit page for one entity, e.g. `/dashboard/users/edit/42`
pub fn resource_edit(resource: Resource, id: &str) -> String {
    format!("{}/{}/edit/{}", HOME, resource.path(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_templates() {
        assert_eq!(resource_list(Resource::Users), "/dashboard/users");
        assert_eq!(
            resource_edit(Resource::Users, "42"),
            "/dashboard/users/edit/42"
        );
        assert_eq!(
            resource_detail(Resource::Certificates, "7"),
            "/dashboard/certificates/7"
        );
    }

    #[test]
    fn test_all_list_routes_are_guarded() {
        for resource in Resource::all() {
            assert!(resource_list(resource).starts_with(crate::auth::guard::PROTECTED_PREFIX));
        }
    }
}
