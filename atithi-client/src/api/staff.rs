//! Staff API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{StaffCreate, StaffMember, StaffUpdate};
use shared::ListQuery;

impl Gateway {
    /// List staff members
    pub async fn staff(&self, query: &ListQuery) -> ClientResult<Vec<StaffMember>> {
        self.query_list(CacheTag::Staff, "/api/staff", query).await
    }

    /// Create a staff member
    pub async fn create_staff(&self, payload: &StaffCreate) -> ClientResult<StaffMember> {
        self.mutate(Method::POST, "/api/staff", payload, &[CacheTag::Staff])
            .await
    }

    /// Update a staff member
    pub async fn update_staff(&self, id: i64, payload: &StaffUpdate) -> ClientResult<StaffMember> {
        self.mutate(
            Method::PATCH,
            &format!("/api/staff/{id}"),
            payload,
            &[CacheTag::Staff],
        )
        .await
    }

    /// Deactivate a staff member
    pub async fn delete_staff(&self, id: i64) -> ClientResult<()> {
        self.mutate_empty(
            Method::DELETE,
            &format!("/api/staff/{id}"),
            &[CacheTag::Staff],
        )
        .await
    }
}
