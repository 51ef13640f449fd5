//! Laundry Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Laundry batch status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaundryStatus {
    SentOut,
    Received,
    Billed,
}

/// Laundry batch entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaundryItem {
    pub id: i64,
    pub property_id: i64,
    pub vendor_id: Option<i64>,
    pub description: String,
    pub quantity: u32,
    pub status: LaundryStatus,
    pub sent_on: NaiveDate,
    /// Charge in paise, known once billed
    pub charge: Option<i64>,
}

/// Create laundry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaundryCreate {
    pub property_id: i64,
    pub vendor_id: Option<i64>,
    pub description: String,
    pub quantity: u32,
    pub sent_on: NaiveDate,
}

/// Update laundry payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaundryUpdate {
    pub vendor_id: Option<i64>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub status: Option<LaundryStatus>,
    pub charge: Option<i64>,
}
