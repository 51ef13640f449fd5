//! Property Model

use serde::{Deserialize, Serialize};

/// Property entity (one hotel)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub is_active: bool,
}

/// Create property payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyCreate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
}

/// Update property payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
