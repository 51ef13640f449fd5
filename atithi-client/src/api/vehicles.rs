//! Vehicles API

use crate::cache::CacheTag;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use http::Method;
use shared::models::{Vehicle, VehicleCreate, VehicleUpdate};
use shared::ListQuery;

impl Gateway {
    /// List registered vehicles
    pub async fn vehicles(&self, query: &ListQuery) -> ClientResult<Vec<Vehicle>> {
        self.query_list(CacheTag::Vehicles, "/api/vehicles", query)
            .await
    }

    /// Register a vehicle
    pub async fn create_vehicle(&self, payload: &VehicleCreate) -> ClientResult<Vehicle> {
        self.mutate(Method::POST, "/api/vehicles", payload, &[CacheTag::Vehicles])
            .await
    }

    /// Update a vehicle entry
    pub async fn update_vehicle(&self, id: i64, payload: &VehicleUpdate) -> ClientResult<Vehicle> {
        self.mutate(
            Method::PATCH,
            &format!("/api/vehicles/{id}"),
            payload,
            &[CacheTag::Vehicles],
        )
        .await
    }

    /// Remove a vehicle entry
    pub async fn delete_vehicle(&self, id: i64) -> ClientResult<()> {
        self.mutate_empty(
            Method::DELETE,
            &format!("/api/vehicles/{id}"),
            &[CacheTag::Vehicles],
        )
        .await
    }
}
