//! Tag-based response cache
//!
//! Query results are stored under an entity tag plus a request-specific key.
//! Mutations invalidate whole tags so every dependent query refetches; there
//! is no TTL and no partial invalidation below the tag level.

use dashmap::DashMap;
use serde_json::Value;

/// Cache tag, one per entity family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    Properties,
    Rooms,
    RoomTypes,
    Staff,
    Bookings,
    Guests,
    Vehicles,
    Payments,
    Vendors,
    Laundry,
    Menu,
    Orders,
    Tables,
    Kitchen,
    Enquiries,
    Sidebar,
}

/// In-memory cache keyed by (tag, request key)
#[derive(Debug, Default)]
pub struct TagCache {
    entries: DashMap<(CacheTag, String), Value>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached response body
    pub fn get(&self, tag: CacheTag, key: &str) -> Option<Value> {
        self.entries.get(&(tag, key.to_string())).map(|v| v.clone())
    }

    /// Store a response body
    pub fn insert(&self, tag: CacheTag, key: impl Into<String>, value: Value) {
        self.entries.insert((tag, key.into()), value);
    }

    /// Drop every entry under one tag
    pub fn invalidate(&self, tag: CacheTag) {
        self.entries.retain(|(t, _), _| *t != tag);
        tracing::debug!(?tag, "cache tag invalidated");
    }

    /// Drop every entry under each of the given tags
    pub fn invalidate_all(&self, tags: &[CacheTag]) {
        for tag in tags {
            self.invalidate(*tag);
        }
    }

    /// Drop everything (logout)
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
