//! Role definitions, normalization and hierarchy checks

use serde::{Deserialize, Serialize};

/// Rank assigned to roles outside the hierarchy table
///
/// Unrecognized roles sort below every real role, so they never satisfy a
/// minimum-role check.
pub const UNRANKED: u8 = u8::MAX;

/// Console roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Super administrator
    SuperAdmin,
    /// Administrator
    Admin,
    /// Support agent
    Support,
}

impl Role {
    /// All roles, most privileged first
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Support];

    /// Canonical display label for the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Support => "Support",
        }
    }

    /// Hierarchy rank; lower number means more privileged
    pub fn rank(&self) -> u8 {
        match self {
            Role::SuperAdmin => 1,
            Role::Admin => 2,
            Role::Support => 3,
        }
    }

    /// Parse a raw role label after normalization
    ///
    /// Accepts any case/separator spelling of the canonical labels; returns
    /// `None` for anything outside the closed set.
    pub fn parse_normalized(raw: &str) -> Option<Role> {
        match fold_label(raw).as_str() {
            "superadmin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "support" => Some(Role::Support),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse_normalized(s).ok_or_else(|| format!("Invalid role: {}", s))
    }
}

/// Collapse case and separators so synonym spellings compare equal
fn fold_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(*c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize a raw role label from the identity provider
///
/// Known synonym spellings ("super admin", "super_admin", "SuperAdmin", ...)
/// map to the canonical label. Unrecognized input is returned trimmed but
/// otherwise unchanged, so equality checks against canonical labels fail
/// naturally. Absent input yields an empty string. Never errors.
pub fn normalize_role(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or_default().trim();
    match Role::parse_normalized(trimmed) {
        Some(role) => role.as_str().to_string(),
        None => trimmed.to_string(),
    }
}

/// Hierarchy rank for a raw role label
///
/// Unrecognized roles get [`UNRANKED`], the least privileged rank.
pub fn role_rank(raw: Option<&str>) -> u8 {
    raw.and_then(Role::parse_normalized)
        .map(|role| role.rank())
        .unwrap_or(UNRANKED)
}

/// Check whether the user's role equals the required role
///
/// Synonym- and case-insensitive equality only; no hierarchy is implied.
pub fn has_role(user_role: Option<&str>, required: Role) -> bool {
    user_role.and_then(Role::parse_normalized) == Some(required)
}

/// Check whether the user's role equals at least one of the required roles
pub fn has_any_role(user_role: Option<&str>, required: &[Role]) -> bool {
    match user_role.and_then(Role::parse_normalized) {
        Some(role) => required.contains(&role),
        None => false,
    }
}

/// Check whether the user's role meets a minimum hierarchy rank
///
/// True iff the user's rank is at or above (numerically at or below) the
/// minimum's rank. An unrecognized user role never satisfies any minimum.
pub fn has_minimum_role(user_role: Option<&str>, minimum: Role) -> bool {
    role_rank(user_role) <= minimum.rank()
}
