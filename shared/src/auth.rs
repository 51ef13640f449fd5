//! Auth-related types shared between server and client
//!
//! Request/response DTOs for the auth endpoints, plus the sidebar links
//! that drive per-route permissions.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Role-derived sidebar link
///
/// One row per route the user's role may visit, carrying the CRUD
/// capabilities for that route. The permission resolver treats a missing
/// row as "no permissions".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarLink {
    pub path: String,
    pub label: String,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}
