//! Menu Model

use serde::{Deserialize, Serialize};

/// Restaurant menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub category: String,
    /// Price in paise
    pub price: i64,
    pub is_vegetarian: bool,
    pub is_available: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub property_id: i64,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub is_vegetarian: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub is_vegetarian: Option<bool>,
    pub is_available: Option<bool>,
}
