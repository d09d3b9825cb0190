//! Default permission grants per role

use super::permissions::{PermAction, Permission, PermissionSet, Resource};
use super::roles::Role;

/// Default permission set granted by a role
///
/// Used when the identity provider issues a role without an explicit
/// permission list.
pub fn role_permissions(role: Role) -> PermissionSet {
    use PermAction::*;
    use Resource::*;

    match role {
        // Super admin holds every permission
        Role::SuperAdmin => PermissionSet::grant_all(),
        // Admin runs the console day to day but cannot touch console
        // settings or remove accounts
        Role::Admin => {
            let all = PermissionSet::grant_all();
            let withheld = [
                Permission::new(Settings, Create),
                Permission::new(Settings, Update),
                Permission::new(Settings, Delete),
                Permission::new(Account, Delete),
            ];
            all.iter()
                .copied()
                .filter(|perm| !withheld.contains(perm))
                .collect()
        }
        // Support is read-only over operational data
        Role::Support => [Hotel, Booking, Report, Promo, PromoGroup]
            .iter()
            .map(|resource| Permission::new(*resource, Read))
            .collect(),
    }
}

/// Resolve the permission set in effect for a session
///
/// Permissions issued by the identity provider win when any of them parse;
/// otherwise the role's default grant applies. An unrecognized role with no
/// usable issued permissions resolves to the empty set, denying everything.
pub fn effective_permissions<S: AsRef<str>>(role: Option<&str>, issued: &[S]) -> PermissionSet {
    let set = PermissionSet::from_strings(issued);
    if !set.is_empty() {
        return set;
    }
    role.and_then(Role::parse_normalized)
        .map(role_permissions)
        .unwrap_or_default()
}
