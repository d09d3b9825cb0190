//! Configuration models for the console core

use crate::auth::rbac::{Permission, Role, normalize_role};
use crate::core::table::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Access-control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Enable route-level access control
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Role assumed when the identity provider issues none
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Roles granted the admin navigation surface
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
    /// Route-to-permission rules; when empty the built-in table applies
    #[serde(default)]
    pub routes: Vec<RouteRule>,
}

/// One route-to-permission rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRule {
    /// Route pattern, e.g. `/hotel-listing/[id]/edit`
    pub pattern: String,
    /// Permissions of which the user must hold at least one
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_role: default_role(),
            admin_roles: default_admin_roles(),
            routes: Vec::new(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        if !other.routes.is_empty() {
            self.routes = other.routes;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        if Role::parse_normalized(&self.default_role).is_none() {
            return Err(format!("Unknown default role: {}", self.default_role));
        }

        for admin_role in &self.admin_roles {
            if Role::parse_normalized(admin_role).is_none() {
                return Err(format!("Unknown admin role: {}", admin_role));
            }
        }

        for rule in &self.routes {
            if rule.pattern.trim().is_empty() {
                return Err("Route rule with empty pattern".to_string());
            }
            for permission in &rule.permissions {
                if permission.parse::<Permission>().is_err() {
                    return Err(format!(
                        "Route {} requires unknown permission: {}",
                        rule.pattern, permission
                    ));
                }
            }
        }

        Ok(())
    }

    /// Check whether a role belongs to the admin surface
    pub fn is_admin_role(&self, role: Option<&str>) -> bool {
        let normalized = normalize_role(role);
        !normalized.is_empty()
            && self
                .admin_roles
                .iter()
                .any(|admin| normalize_role(Some(admin)) == normalized)
    }
}

/// Table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Page size used when the URL carries none
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Page sizes offered by the table footer
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
    /// Debounce window for committing search text, in milliseconds
    ///
    /// Consumed by the UI binding layer; the synchronizer itself is
    /// time-free.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl TableConfig {
    /// Merge table configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_page_size != default_page_size() {
            self.default_page_size = other.default_page_size;
        }
        if other.page_size_options != default_page_size_options() {
            self.page_size_options = other.page_size_options;
        }
        if other.search_debounce_ms != default_search_debounce_ms() {
            self.search_debounce_ms = other.search_debounce_ms;
        }
        self
    }

    /// Validate table configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_page_size == 0 {
            return Err("Default page size must be positive".to_string());
        }

        if self.page_size_options.iter().any(|size| *size == 0) {
            return Err("Page size options must be positive".to_string());
        }

        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(format!(
                "Default page size {} is not among the offered options",
                self.default_page_size
            ));
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_role() -> String {
    "Support".to_string()
}

fn default_admin_roles() -> Vec<String> {
    vec!["Super Admin".to_string(), "Admin".to_string()]
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 20, 50, 100]
}

fn default_search_debounce_ms() -> u64 {
    300
}

/// Warn about insecure configuration
pub fn warn_insecure_config(config: &AccessConfig) {
    if !config.enabled {
        warn!(
            "Route access control is disabled! Every authenticated user can reach every console page."
        );
    }
}
