//! Shared types for the AtithiFlow client
//!
//! Wire models, API response envelope, list-query types and auth DTOs
//! shared between the gateway crate and the console crate.

pub mod auth;
pub mod models;
pub mod query;
pub mod response;

// Re-exports
pub use auth::{LoginRequest, LoginResponse, SidebarLink, UserInfo};
pub use query::ListQuery;
pub use response::{ApiResponse, PaginatedResponse, Pagination};
pub use serde::{Deserialize, Serialize};
