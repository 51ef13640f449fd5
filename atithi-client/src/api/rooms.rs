//! Rooms API
//!
//! Read endpoints feed the floor/room reconciliation engine; the bulk
//! update submits its minimal diff as a single call.

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Room, RoomCreate, RoomListResponse, RoomType, RoomTypeChange};

impl Gateway {
    /// Authoritative room list for a property
    pub async fn rooms(&self, property_id: i64) -> ClientResult<Vec<Room>> {
        let resp: RoomListResponse = self
            .query(
                CacheTag::Rooms,
                &format!("property:{property_id}"),
                &format!("/api/properties/{property_id}/rooms"),
            )
            .await?;
        Ok(resp.rooms)
    }

    /// Room type catalog for a property
    pub async fn room_types(&self, property_id: i64) -> ClientResult<Vec<RoomType>> {
        self.query(
            CacheTag::RoomTypes,
            &format!("property:{property_id}"),
            &format!("/api/properties/{property_id}/room-types"),
        )
        .await
    }

    /// Submit a bulk room-type reassignment as one atomic call
    ///
    /// Invalidates the rooms tag on success so the diff baseline advances on
    /// the next fetch. On failure nothing is invalidated and the caller's
    /// edit state stays intact for a retry.
    pub async fn bulk_update_rooms(
        &self,
        property_id: i64,
        changes: &[RoomTypeChange],
    ) -> ClientResult<()> {
        tracing::debug!(property_id, count = changes.len(), "submitting bulk room update");
        self.mutate_unit(
            Method::PATCH,
            &format!("/api/properties/{property_id}/rooms/bulk-update"),
            &changes,
            &[CacheTag::Rooms],
        )
        .await
    }

    /// Create a single room on a floor with a resolved type
    pub async fn create_room(&self, payload: &RoomCreate) -> ClientResult<Room> {
        self.mutate(Method::POST, "/api/rooms", payload, &[CacheTag::Rooms])
            .await
    }
}
