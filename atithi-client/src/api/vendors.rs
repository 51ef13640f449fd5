//! Vendors API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Vendor, VendorCreate, VendorUpdate};
use shared::ListQuery;

impl Gateway {
    /// List vendors
    pub async fn vendors(&self, query: &ListQuery) -> ClientResult<Vec<Vendor>> {
        self.query_list(CacheTag::Vendors, "/api/vendors", query).await
    }

    /// Create a vendor
    pub async fn create_vendor(&self, payload: &VendorCreate) -> ClientResult<Vendor> {
        self.mutate(Method::POST, "/api/vendors", payload, &[CacheTag::Vendors])
            .await
    }

    /// Update a vendor
    pub async fn update_vendor(&self, id: i64, payload: &VendorUpdate) -> ClientResult<Vendor> {
        self.mutate(
            Method::PATCH,
            &format!("/api/vendors/{id}"),
            payload,
            &[CacheTag::Vendors],
        )
        .await
    }
}
