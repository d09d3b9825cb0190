//! Role-Based Access Control (RBAC) for console pages
//!
//! This module decides whether a role or permission set satisfies an access
//! requirement. All checks are pure and total: malformed input degrades to
//! the least-privileged outcome instead of erroring.

mod grants;
mod permissions;
mod roles;
mod routes;

// Re-export public types and functions
pub use grants::{effective_permissions, role_permissions};
pub use permissions::{PermAction, Permission, PermissionSet, Resource};
pub use roles::{
    Role, UNRANKED, has_any_role, has_minimum_role, has_role, normalize_role, role_rank,
};
pub use routes::{RouteGuard, RoutePattern, is_public_route};
