//! Typed permissions and permission-set checks

use crate::utils::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Resources that console permissions gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    /// Agent and staff accounts
    Account,
    /// Hotel listings
    Hotel,
    /// Promotions
    Promo,
    /// Promotion groups
    PromoGroup,
    /// Reports
    Report,
    /// Bookings
    Booking,
    /// Console settings
    Settings,
}

impl Resource {
    /// All gated resources
    pub const ALL: [Resource; 7] = [
        Resource::Account,
        Resource::Hotel,
        Resource::Promo,
        Resource::PromoGroup,
        Resource::Report,
        Resource::Booking,
        Resource::Settings,
    ];

    /// Wire name of the resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Account => "account",
            Resource::Hotel => "hotel",
            Resource::Promo => "promo",
            Resource::PromoGroup => "promo-group",
            Resource::Report => "report",
            Resource::Booking => "booking",
            Resource::Settings => "settings",
        }
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(Resource::Account),
            "hotel" => Ok(Resource::Hotel),
            "promo" => Ok(Resource::Promo),
            "promo-group" => Ok(Resource::PromoGroup),
            "report" => Ok(Resource::Report),
            "booking" => Ok(Resource::Booking),
            "settings" => Ok(Resource::Settings),
            _ => Err(format!("Invalid resource: {}", s)),
        }
    }
}

/// Actions a permission can allow on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermAction {
    /// Read/list the resource
    Read,
    /// Create new entries
    Create,
    /// Update existing entries
    Update,
    /// Delete entries
    Delete,
}

impl PermAction {
    /// All actions
    pub const ALL: [PermAction; 4] = [
        PermAction::Read,
        PermAction::Create,
        PermAction::Update,
        PermAction::Delete,
    ];

    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            PermAction::Read => "read",
            PermAction::Create => "create",
            PermAction::Update => "update",
            PermAction::Delete => "delete",
        }
    }
}

impl std::str::FromStr for PermAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(PermAction::Read),
            "create" => Ok(PermAction::Create),
            "update" => Ok(PermAction::Update),
            "delete" => Ok(PermAction::Delete),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// Permission granting an action on a resource
///
/// The wire form is `resource:action`, e.g. `hotel:update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: Resource,
    pub action: PermAction,
}

impl Permission {
    /// Create a new permission from a resource and action
    pub const fn new(resource: Resource, action: PermAction) -> Self {
        Self { resource, action }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = ConsoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Split on the first colon to recover resource and action.
        let (resource, action) = value
            .split_once(':')
            .ok_or_else(|| ConsoleError::invalid_permission(value))?;
        let resource = resource
            .trim()
            .parse::<Resource>()
            .map_err(|_| ConsoleError::invalid_permission(value))?;
        let action = action
            .trim()
            .parse::<PermAction>()
            .map_err(|_| ConsoleError::invalid_permission(value))?;
        Ok(Self::new(resource, action))
    }
}

/// An unordered set of permissions owned by a user
///
/// Built leniently from the identity provider's string list: unparseable
/// entries are dropped, duplicates collapse, and order is irrelevant. An
/// empty set fails every non-empty requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    permissions: HashSet<Permission>,
}

impl PermissionSet {
    /// Create an empty permission set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding every resource/action pair
    pub fn grant_all() -> Self {
        Resource::ALL
            .into_iter()
            .flat_map(|resource| {
                PermAction::ALL
                    .into_iter()
                    .map(move |action| Permission::new(resource, action))
            })
            .collect()
    }

    /// Build a set from identity-provider permission strings
    ///
    /// The wildcard entry `*` expands to every known permission. Entries that
    /// fail to parse are dropped rather than erroring, so a stale or foreign
    /// permission string can never widen access.
    pub fn from_strings<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut set = Self::new();
        for entry in raw {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            if entry == "*" {
                return Self::grant_all();
            }
            match entry.parse::<Permission>() {
                Ok(permission) => {
                    set.permissions.insert(permission);
                }
                Err(_) => {
                    debug!(permission = entry, "dropping unrecognized permission");
                }
            }
        }
        set
    }

    /// Add a permission to the set
    pub fn insert(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Number of distinct permissions held
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the set holds no permissions
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Iterate over held permissions in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    /// Check membership of a single permission
    pub fn has_permission(&self, required: Permission) -> bool {
        self.permissions.contains(&required)
    }

    /// Check that every required permission is held
    ///
    /// An empty requirement list is vacuously satisfied.
    pub fn has_all_permissions(&self, required: &[Permission]) -> bool {
        required.iter().all(|perm| self.permissions.contains(perm))
    }

    /// Check that at least one required permission is held
    ///
    /// An empty requirement list is never satisfied.
    pub fn has_any_permission(&self, required: &[Permission]) -> bool {
        required.iter().any(|perm| self.permissions.contains(perm))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<I: IntoIterator<Item = Permission>>(&mut self, iter: I) {
        self.permissions.extend(iter);
    }
}
