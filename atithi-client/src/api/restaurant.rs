//! Restaurant API - orders and dining tables

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, OrderCreate, OrderUpdate, RestaurantOrder,
};
use shared::ListQuery;

impl Gateway {
    // ========== Orders ==========

    /// List restaurant orders
    pub async fn orders(&self, query: &ListQuery) -> ClientResult<Vec<RestaurantOrder>> {
        self.query_list(CacheTag::Orders, "/api/restaurant-orders", query)
            .await
    }

    /// Place an order
    ///
    /// Ordering consumes stock, so the kitchen tag is invalidated too.
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<RestaurantOrder> {
        self.mutate(
            Method::POST,
            "/api/restaurant-orders",
            payload,
            &[CacheTag::Orders, CacheTag::Kitchen],
        )
        .await
    }

    /// Update an order (items, status transitions)
    pub async fn update_order(
        &self,
        id: i64,
        payload: &OrderUpdate,
    ) -> ClientResult<RestaurantOrder> {
        self.mutate(
            Method::PATCH,
            &format!("/api/restaurant-orders/{id}"),
            payload,
            &[CacheTag::Orders, CacheTag::Kitchen],
        )
        .await
    }

    // ========== Dining Tables ==========

    /// List dining tables
    pub async fn dining_tables(&self, query: &ListQuery) -> ClientResult<Vec<DiningTable>> {
        self.query_list(CacheTag::Tables, "/api/tables", query).await
    }

    /// Create a dining table
    pub async fn create_dining_table(
        &self,
        payload: &DiningTableCreate,
    ) -> ClientResult<DiningTable> {
        self.mutate(Method::POST, "/api/tables", payload, &[CacheTag::Tables])
            .await
    }

    /// Update a dining table
    pub async fn update_dining_table(
        &self,
        id: i64,
        payload: &DiningTableUpdate,
    ) -> ClientResult<DiningTable> {
        self.mutate(
            Method::PATCH,
            &format!("/api/tables/{id}"),
            payload,
            &[CacheTag::Tables],
        )
        .await
    }
}
