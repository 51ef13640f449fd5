//! List query types
//!
//! Unified query parameters for list endpoints. Serialized straight into the
//! URL query string by the gateway.

use serde::{Deserialize, Serialize};

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Scope results to one property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Free-text search term
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Include soft-deactivated records
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_inactive: bool,
}

impl ListQuery {
    /// Query for all active records
    pub fn all() -> Self {
        Self::default()
    }

    /// Query scoped to one property
    pub fn for_property(property_id: i64) -> Self {
        Self {
            property_id: Some(property_id),
            ..Self::default()
        }
    }

    /// Add pagination
    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Add a search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Include inactive records
    pub fn with_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    /// Stable cache key for this query
    pub fn cache_key(&self) -> String {
        format!(
            "p{}:pg{}:l{}:s{}:i{}",
            self.property_id.map_or_else(String::new, |v| v.to_string()),
            self.page.map_or_else(String::new, |v| v.to_string()),
            self.limit.map_or_else(String::new, |v| v.to_string()),
            self.search.as_deref().unwrap_or(""),
            self.include_inactive,
        )
    }
}
