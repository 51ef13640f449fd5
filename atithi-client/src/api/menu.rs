//! Menu API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::ListQuery;

impl Gateway {
    /// List menu items
    pub async fn menu_items(&self, query: &ListQuery) -> ClientResult<Vec<MenuItem>> {
        self.query_list(CacheTag::Menu, "/api/menu-items", query).await
    }

    /// Create a menu item
    pub async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.mutate(Method::POST, "/api/menu-items", payload, &[CacheTag::Menu])
            .await
    }

    /// Update a menu item (price, availability)
    pub async fn update_menu_item(
        &self,
        id: i64,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.mutate(
            Method::PATCH,
            &format!("/api/menu-items/{id}"),
            payload,
            &[CacheTag::Menu],
        )
        .await
    }

    /// Remove a menu item
    pub async fn delete_menu_item(&self, id: i64) -> ClientResult<()> {
        self.mutate_empty(
            Method::DELETE,
            &format!("/api/menu-items/{id}"),
            &[CacheTag::Menu],
        )
        .await
    }
}
