//! Properties API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Property, PropertyCreate, PropertyUpdate};
use shared::ListQuery;

impl Gateway {
    /// List properties
    pub async fn properties(&self, query: &ListQuery) -> ClientResult<Vec<Property>> {
        self.query_list(CacheTag::Properties, "/api/properties", query)
            .await
    }

    /// Fetch one property
    pub async fn property(&self, id: i64) -> ClientResult<Property> {
        self.query(
            CacheTag::Properties,
            &format!("id:{id}"),
            &format!("/api/properties/{id}"),
        )
        .await
    }

    /// Create a property
    pub async fn create_property(&self, payload: &PropertyCreate) -> ClientResult<Property> {
        self.mutate(
            Method::POST,
            "/api/properties",
            payload,
            &[CacheTag::Properties],
        )
        .await
    }

    /// Update a property
    pub async fn update_property(
        &self,
        id: i64,
        payload: &PropertyUpdate,
    ) -> ClientResult<Property> {
        self.mutate(
            Method::PATCH,
            &format!("/api/properties/{id}"),
            payload,
            &[CacheTag::Properties],
        )
        .await
    }
}
