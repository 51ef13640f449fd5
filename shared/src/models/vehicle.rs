//! Vehicle Model

use serde::{Deserialize, Serialize};

/// Guest vehicle entity (parking register)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub property_id: i64,
    pub guest_id: Option<i64>,
    pub registration_number: String,
    pub vehicle_type: Option<String>,
}

/// Create vehicle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleCreate {
    pub property_id: i64,
    pub guest_id: Option<i64>,
    pub registration_number: String,
    pub vehicle_type: Option<String>,
}

/// Update vehicle payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleUpdate {
    pub guest_id: Option<i64>,
    pub registration_number: Option<String>,
    pub vehicle_type: Option<String>,
}
