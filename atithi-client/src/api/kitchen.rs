//! Kitchen Inventory API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{KitchenItem, KitchenItemCreate, KitchenItemUpdate};
use shared::ListQuery;

impl Gateway {
    /// List kitchen inventory items
    pub async fn kitchen_items(&self, query: &ListQuery) -> ClientResult<Vec<KitchenItem>> {
        self.query_list(CacheTag::Kitchen, "/api/kitchen-inventory", query)
            .await
    }

    /// Add an inventory item
    pub async fn create_kitchen_item(
        &self,
        payload: &KitchenItemCreate,
    ) -> ClientResult<KitchenItem> {
        self.mutate(
            Method::POST,
            "/api/kitchen-inventory",
            payload,
            &[CacheTag::Kitchen],
        )
        .await
    }

    /// Update an inventory item (stock counts, reorder level)
    pub async fn update_kitchen_item(
        &self,
        id: i64,
        payload: &KitchenItemUpdate,
    ) -> ClientResult<KitchenItem> {
        self.mutate(
            Method::PATCH,
            &format!("/api/kitchen-inventory/{id}"),
            payload,
            &[CacheTag::Kitchen],
        )
        .await
    }
}
