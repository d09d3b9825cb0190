//! Route patterns and the route-to-permission guard

use super::permissions::{PermAction, Permission, PermissionSet, Resource};
use crate::config::AccessConfig;
use crate::utils::error::{ConsoleError, Result};
use once_cell::sync::Lazy;
use tracing::debug;

/// One segment of a compiled route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must match the path segment exactly
    Literal(String),
    /// `[id]`-style wildcard; matches any single non-empty segment
    Param,
}

/// A route pattern compiled once at registration
///
/// Patterns look like `/hotel-listing/[id]/edit`: bracketed segments match
/// any single non-slash path segment, everything else matches literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    wildcards: usize,
}

impl RoutePattern {
    /// Compile a pattern string
    ///
    /// Total: any segment wrapped in brackets becomes a wildcard, everything
    /// else is a literal. Leading, trailing and doubled slashes are ignored.
    pub fn parse(pattern: &str) -> Self {
        let segments: Vec<Segment> = split_path(pattern)
            .map(|segment| {
                if segment.starts_with('[') && segment.ends_with(']') && segment.len() > 1 {
                    Segment::Param
                } else {
                    Segment::Literal(segment.to_string())
                }
            })
            .collect();
        let wildcards = segments
            .iter()
            .filter(|s| matches!(s, Segment::Param))
            .count();
        Self {
            raw: pattern.to_string(),
            segments,
            wildcards,
        }
    }

    /// The pattern string as registered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of wildcard segments in the pattern
    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// Check whether a concrete path matches this pattern exactly
    pub fn matches(&self, path: &str) -> bool {
        let mut segments = self.segments.iter();
        let mut count = 0usize;
        for part in split_path(path) {
            count += 1;
            match segments.next() {
                Some(Segment::Literal(literal)) if literal == part => {}
                Some(Segment::Param) => {}
                _ => return false,
            }
        }
        count == self.segments.len()
    }
}

/// Iterate the non-empty segments of a path, ignoring query and fragment
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let path = path.split_once('#').map_or(path, |(p, _)| p);
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Static route-to-permission table with deterministic matching
///
/// Holds an ordered list of compiled patterns, each paired with the set of
/// permissions of which a user must hold at least one.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    routes: Vec<(RoutePattern, Vec<Permission>)>,
}

/// Console route table used when configuration supplies none
static DEFAULT_ROUTES: Lazy<Vec<(&'static str, Vec<Permission>)>> = Lazy::new(|| {
    use PermAction::*;
    use Resource::*;
    vec![
        ("/account", vec![Permission::new(Account, Read)]),
        ("/account/create", vec![Permission::new(Account, Create)]),
        ("/account/[id]/edit", vec![Permission::new(Account, Update)]),
        ("/hotel-listing", vec![Permission::new(Hotel, Read)]),
        ("/hotel-listing/create", vec![Permission::new(Hotel, Create)]),
        (
            "/hotel-listing/[id]/edit",
            vec![Permission::new(Hotel, Update)],
        ),
        ("/promo", vec![Permission::new(Promo, Read)]),
        ("/promo/create", vec![Permission::new(Promo, Create)]),
        ("/promo/[id]/edit", vec![Permission::new(Promo, Update)]),
        ("/promo-group", vec![Permission::new(PromoGroup, Read)]),
        (
            "/promo-group/create",
            vec![Permission::new(PromoGroup, Create)],
        ),
        (
            "/promo-group/[id]/edit",
            vec![Permission::new(PromoGroup, Update)],
        ),
        ("/report", vec![Permission::new(Report, Read)]),
        ("/booking", vec![Permission::new(Booking, Read)]),
        ("/booking/[id]", vec![Permission::new(Booking, Read)]),
        (
            "/settings",
            vec![
                Permission::new(Settings, Read),
                Permission::new(Settings, Update),
            ],
        ),
    ]
});

impl RouteGuard {
    /// Create an empty guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a guard carrying the built-in console route table
    pub fn with_defaults() -> Self {
        let mut guard = Self::new();
        for (pattern, permissions) in DEFAULT_ROUTES.iter() {
            guard.register(pattern, permissions.clone());
        }
        debug!(routes = guard.routes.len(), "route guard initialized");
        guard
    }

    /// Build a guard from configuration
    ///
    /// Falls back to the built-in table when the configuration lists no
    /// routes. Unparseable permission strings are an error here: the route
    /// table is operator-supplied and should fail loudly at startup rather
    /// than silently widening access.
    pub fn from_config(config: &AccessConfig) -> Result<Self> {
        if config.routes.is_empty() {
            return Ok(Self::with_defaults());
        }
        let mut guard = Self::new();
        for rule in &config.routes {
            if rule.pattern.trim().is_empty() {
                return Err(ConsoleError::config("route rule with empty pattern"));
            }
            let permissions = rule
                .permissions
                .iter()
                .map(|raw| raw.parse::<Permission>())
                .collect::<Result<Vec<_>>>()?;
            guard.register(&rule.pattern, permissions);
        }
        debug!(routes = guard.routes.len(), "route guard built from config");
        Ok(guard)
    }

    /// Register a pattern with its required permissions
    pub fn register(&mut self, pattern: &str, permissions: Vec<Permission>) {
        self.routes.push((RoutePattern::parse(pattern), permissions));
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the guard has no registered routes
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the required permissions for a concrete path
    ///
    /// When several patterns match, the one with the fewest wildcard
    /// segments wins (a literal route shadows a wildcard route); remaining
    /// ties resolve to the earliest-registered pattern. Returns `None` for
    /// unmapped paths.
    pub fn match_route(&self, path: &str) -> Option<&[Permission]> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(_, (pattern, _))| pattern.matches(path))
            .min_by_key(|(index, (pattern, _))| (pattern.wildcards(), *index))
            .map(|(_, (_, permissions))| permissions.as_slice())
    }

    /// Decide whether a permission set may enter a path
    ///
    /// Unmapped paths are allowed: routes absent from the table are
    /// implicitly public to any authenticated user. A mapped path with an
    /// empty requirement list is allowed; otherwise the user must hold at
    /// least one of the required permissions.
    pub fn is_route_allowed(&self, permissions: &PermissionSet, path: &str) -> bool {
        match self.match_route(path) {
            None => true,
            Some(required) if required.is_empty() => true,
            Some(required) => permissions.has_any_permission(required),
        }
    }
}

/// Check whether a path belongs to the unauthenticated surface
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &[
        "/login",
        "/forgot-password",
        "/reset-password",
        "/health",
    ];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}
