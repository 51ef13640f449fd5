//! Bookings API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Booking, BookingCreate, BookingUpdate};
use shared::{ListQuery, PaginatedResponse};

impl Gateway {
    /// List bookings, paginated
    pub async fn bookings(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Booking>> {
        self.query_list(CacheTag::Bookings, "/api/bookings", query)
            .await
    }

    /// Fetch one booking
    pub async fn booking(&self, id: i64) -> ClientResult<Booking> {
        self.query(
            CacheTag::Bookings,
            &format!("id:{id}"),
            &format!("/api/bookings/{id}"),
        )
        .await
    }

    /// Create a booking
    ///
    /// A new booking changes room availability, so the rooms tag is
    /// invalidated alongside bookings.
    pub async fn create_booking(&self, payload: &BookingCreate) -> ClientResult<Booking> {
        self.mutate(
            Method::POST,
            "/api/bookings",
            payload,
            &[CacheTag::Bookings, CacheTag::Rooms],
        )
        .await
    }

    /// Update a booking (status changes, reassignment, edits)
    pub async fn update_booking(&self, id: i64, payload: &BookingUpdate) -> ClientResult<Booking> {
        self.mutate(
            Method::PATCH,
            &format!("/api/bookings/{id}"),
            payload,
            &[CacheTag::Bookings, CacheTag::Rooms],
        )
        .await
    }
}
