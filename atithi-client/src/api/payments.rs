//! Payments API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Payment, PaymentCreate};
use shared::{ListQuery, PaginatedResponse};

impl Gateway {
    /// List payments, paginated
    pub async fn payments(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Payment>> {
        self.query_list(CacheTag::Payments, "/api/payments", query)
            .await
    }

    /// Record a payment
    ///
    /// Payments settle bookings, so the bookings tag is invalidated too.
    pub async fn create_payment(&self, payload: &PaymentCreate) -> ClientResult<Payment> {
        self.mutate(
            Method::POST,
            "/api/payments",
            payload,
            &[CacheTag::Payments, CacheTag::Bookings],
        )
        .await
    }
}
