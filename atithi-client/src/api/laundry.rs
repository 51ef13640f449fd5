//! Laundry API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{LaundryCreate, LaundryItem, LaundryUpdate};
use shared::ListQuery;

impl Gateway {
    /// List laundry batches
    pub async fn laundry(&self, query: &ListQuery) -> ClientResult<Vec<LaundryItem>> {
        self.query_list(CacheTag::Laundry, "/api/laundry", query).await
    }

    /// Record a batch sent out
    pub async fn create_laundry(&self, payload: &LaundryCreate) -> ClientResult<LaundryItem> {
        self.mutate(Method::POST, "/api/laundry", payload, &[CacheTag::Laundry])
            .await
    }

    /// Update a batch (received, billed, charge)
    pub async fn update_laundry(
        &self,
        id: i64,
        payload: &LaundryUpdate,
    ) -> ClientResult<LaundryItem> {
        self.mutate(
            Method::PATCH,
            &format!("/api/laundry/{id}"),
            payload,
            &[CacheTag::Laundry],
        )
        .await
    }
}
