//! Kitchen Inventory Model

use serde::{Deserialize, Serialize};

/// Kitchen inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenItem {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    /// Reorder threshold in the same unit
    pub reorder_level: Option<f64>,
    pub vendor_id: Option<i64>,
}

/// Create kitchen item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenItemCreate {
    pub property_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub reorder_level: Option<f64>,
    pub vendor_id: Option<i64>,
}

/// Update kitchen item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitchenItemUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<f64>,
    pub reorder_level: Option<f64>,
    pub vendor_id: Option<i64>,
}
