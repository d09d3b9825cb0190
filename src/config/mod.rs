//! Configuration management for the console core
//!
//! This module handles loading and validation of console configuration.

mod models;

pub use models::{AccessConfig, RouteRule, TableConfig, warn_insecure_config};

use crate::auth::rbac::RouteGuard;
use crate::utils::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the console core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Access-control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Table configuration
    #[serde(default)]
    pub table: TableConfig,
}

impl ConsoleConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ConsoleConfig = serde_yaml::from_str(content)
            .map_err(|e| ConsoleError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        warn_insecure_config(&config.access);

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.access.validate().map_err(ConsoleError::Config)?;
        self.table.validate().map_err(ConsoleError::Config)?;
        Ok(())
    }

    /// Build the route guard this configuration describes
    ///
    /// With access control disabled the guard is empty, so every route is
    /// unmapped and implicitly allowed.
    pub fn route_guard(&self) -> Result<RouteGuard> {
        if !self.access.enabled {
            return Ok(RouteGuard::new());
        }
        RouteGuard::from_config(&self.access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::rbac::PermissionSet;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.access.enabled);
        assert_eq!(config.table.default_page_size, 10);
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let config = ConsoleConfig::from_yaml("{}").unwrap();
        assert_eq!(config.access.default_role, "Support");
        assert_eq!(config.table.page_size_options, vec![10, 20, 50, 100]);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
access:
  enabled: true
  default_role: admin
  admin_roles: ["super_admin"]
  routes:
    - pattern: "/hotel-listing/[id]/edit"
      permissions: ["hotel:update"]
table:
  default_page_size: 20
  page_size_options: [20, 50]
  search_debounce_ms: 500
"#;
        let config = ConsoleConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.access.default_role, "admin");
        assert_eq!(config.table.default_page_size, 20);
        assert_eq!(config.access.routes.len(), 1);

        let guard = config.route_guard().unwrap();
        let editor = PermissionSet::from_strings(&["hotel:update"]);
        assert!(guard.is_route_allowed(&editor, "/hotel-listing/7/edit"));
        let reader = PermissionSet::from_strings(&["hotel:read"]);
        assert!(!guard.is_route_allowed(&reader, "/hotel-listing/7/edit"));
    }

    #[test]
    fn test_unknown_default_role_rejected() {
        let yaml = "access:\n  default_role: janitor\n";
        assert!(ConsoleConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_unknown_route_permission_rejected() {
        let yaml = r#"
access:
  routes:
    - pattern: "/hotel-listing"
      permissions: ["hotel:fly"]
"#;
        assert!(ConsoleConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_page_size_not_in_options_rejected() {
        let yaml = "table:\n  default_page_size: 15\n";
        assert!(ConsoleConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_disabled_access_builds_empty_guard() {
        let yaml = "access:\n  enabled: false\n";
        let config = ConsoleConfig::from_yaml(yaml).unwrap();
        let guard = config.route_guard().unwrap();
        assert!(guard.is_empty());
        assert!(guard.is_route_allowed(&PermissionSet::new(), "/settings"));
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "table:\n  default_page_size: 50\n").unwrap();

        let config = ConsoleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.table.default_page_size, 50);
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = ConsoleConfig::from_file("/no/such/config.yaml");
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_merge_prefers_explicit_values() {
        let base = AccessConfig::default();
        let override_config = AccessConfig {
            enabled: false,
            default_role: "Admin".to_string(),
            ..AccessConfig::default()
        };
        let merged = base.merge(override_config);
        assert!(!merged.enabled);
        assert_eq!(merged.default_role, "Admin");

        let merged = TableConfig::default().merge(TableConfig {
            default_page_size: 20,
            page_size_options: vec![20, 40],
            ..TableConfig::default()
        });
        assert_eq!(merged.default_page_size, 20);
        assert_eq!(merged.page_size_options, vec![20, 40]);
    }

    #[test]
    fn test_is_admin_role_normalizes() {
        let config = AccessConfig::default();
        assert!(config.is_admin_role(Some("super_admin")));
        assert!(config.is_admin_role(Some("ADMIN")));
        assert!(!config.is_admin_role(Some("support")));
        assert!(!config.is_admin_role(None));
    }
}
