//! Restaurant Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Restaurant order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    InKitchen,
    Served,
    Settled,
    Void,
}

/// One line of a restaurant order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub quantity: u32,
    /// Unit price in paise at order time
    pub unit_price: i64,
    pub notes: Option<String>,
}

/// Restaurant order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantOrder {
    pub id: i64,
    pub property_id: i64,
    /// Dining table the order belongs to; room-service orders carry a room instead
    pub table_id: Option<i64>,
    pub room_id: Option<i64>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub property_id: i64,
    pub table_id: Option<i64>,
    pub room_id: Option<i64>,
    pub items: Vec<OrderItem>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub table_id: Option<i64>,
    pub items: Option<Vec<OrderItem>>,
    pub status: Option<OrderStatus>,
}
