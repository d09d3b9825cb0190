//! # staydesk
//!
//! Back-office core for a hotel & booking administration console.
//!
//! The console itself is a thin layer of pages and dialogs over a remote
//! booking API; this crate holds the two parts with real invariants:
//!
//! - **Authorization model**: pure role/permission checks and a static
//!   route-to-permission guard that decides page access and navigation
//!   visibility.
//! - **Table query-state synchronizer**: a lossless two-way mapping between
//!   a data table's pagination/sort/filter/search state and flat URL query
//!   parameters, so table state survives reloads and drives server-side
//!   fetching.
//!
//! Both components are synchronous and total: malformed input degrades to a
//! documented default or the least-privileged outcome, never an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use staydesk::auth::rbac::{PermissionSet, RouteGuard};
//! use staydesk::core::table::{TableSpec, decode_query_str, encode_query_str};
//!
//! // Gate a page by the session's permissions
//! let guard = RouteGuard::with_defaults();
//! let perms = PermissionSet::from_strings(&["hotel:update"]);
//! assert!(guard.is_route_allowed(&perms, "/hotel-listing/42/edit"));
//!
//! // Restore table state from the incoming URL and push changes back
//! let state = decode_query_str("?page=3&pageSize=20&sort=name.desc", &TableSpec::new());
//! assert_eq!(state.page(), 3);
//! assert_eq!(encode_query_str(&state), "page=3&pageSize=20&sort=name.desc");
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::ConsoleConfig;
pub use utils::error::{ConsoleError, Result};

// Export the authorization model
pub use auth::rbac::{
    PermAction, Permission, PermissionSet, Resource, Role, RouteGuard, effective_permissions,
    has_any_role, has_minimum_role, has_role, is_public_route, normalize_role, role_permissions,
};

// Export the table query-state synchronizer
pub use crate::core::table::{
    FilterValue, PageState, Sort, TableQuery, TableSpec, Update, apply_filter_update,
    apply_pagination_update, apply_search_update, apply_sorting_update, decode, decode_query_str,
    encode, encode_query_str,
};

// Export the external API boundary types
pub use crate::core::types::{ApiEnvelope, Pagination, SortDirection};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
