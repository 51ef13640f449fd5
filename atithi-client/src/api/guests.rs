//! Guests API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Guest, GuestCreate, GuestUpdate};
use shared::{ListQuery, PaginatedResponse};

impl Gateway {
    /// List guests, paginated
    pub async fn guests(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Guest>> {
        self.query_list(CacheTag::Guests, "/api/guests", query).await
    }

    /// Fetch one guest
    pub async fn guest(&self, id: i64) -> ClientResult<Guest> {
        self.query(
            CacheTag::Guests,
            &format!("id:{id}"),
            &format!("/api/guests/{id}"),
        )
        .await
    }

    /// Create a guest
    pub async fn create_guest(&self, payload: &GuestCreate) -> ClientResult<Guest> {
        self.mutate(Method::POST, "/api/guests", payload, &[CacheTag::Guests])
            .await
    }

    /// Update a guest
    pub async fn update_guest(&self, id: i64, payload: &GuestUpdate) -> ClientResult<Guest> {
        self.mutate(
            Method::PATCH,
            &format!("/api/guests/{id}"),
            payload,
            &[CacheTag::Guests],
        )
        .await
    }
}
