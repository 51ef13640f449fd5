//! Enquiries API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Enquiry, EnquiryUpdate};
use shared::ListQuery;

impl Gateway {
    /// List contact enquiries
    pub async fn enquiries(&self, query: &ListQuery) -> ClientResult<Vec<Enquiry>> {
        self.query_list(CacheTag::Enquiries, "/api/enquiries", query)
            .await
    }

    /// Mark an enquiry handled
    pub async fn update_enquiry(&self, id: i64, payload: &EnquiryUpdate) -> ClientResult<Enquiry> {
        self.mutate(
            Method::PATCH,
            &format!("/api/enquiries/{id}"),
            payload,
            &[CacheTag::Enquiries],
        )
        .await
    }
}
