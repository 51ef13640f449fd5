//! Permission resolver
//!
//! Maps the current route to a CRUD capability set derived from the
//! authenticated user's role-derived sidebar links. A route with no link
//! row resolves to no permissions, which also covers the still-loading
//! case when the resolver is built from an empty list.

use atithi_client::{ClientResult, Gateway};
use serde::{Deserialize, Serialize};
use shared::SidebarLink;

/// CRUD capability set for one route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl Capabilities {
    /// No permissions at all (fail closed)
    pub const fn none() -> Self {
        Self {
            can_create: false,
            can_read: false,
            can_update: false,
            can_delete: false,
        }
    }

    /// Whether any capability is granted
    pub fn any(&self) -> bool {
        self.can_create || self.can_read || self.can_update || self.can_delete
    }
}

/// Resolves routes to capability sets
#[derive(Debug, Clone, Default)]
pub struct PermissionResolver {
    links: Vec<SidebarLink>,
}

impl PermissionResolver {
    /// Build a resolver from sidebar links
    pub fn new(links: Vec<SidebarLink>) -> Self {
        Self { links }
    }

    /// Resolver with no links: every route resolves to no permissions
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch the current user's sidebar links and build a resolver
    pub async fn fetch(gateway: &Gateway) -> ClientResult<Self> {
        Ok(Self::new(gateway.sidebar_links().await?))
    }

    /// Capabilities for the given route path
    ///
    /// Exact match after trailing-slash normalization; no row means no
    /// permissions.
    pub fn resolve(&self, path: &str) -> Capabilities {
        let path = normalize(path);
        self.links
            .iter()
            .find(|link| normalize(&link.path) == path)
            .map(|link| Capabilities {
                can_create: link.can_create,
                can_read: link.can_read,
                can_update: link.can_update,
                can_delete: link.can_delete,
            })
            .unwrap_or_else(Capabilities::none)
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
