//! AtithiFlow Client - typed HTTP gateway for the AtithiFlow API
//!
//! Issues authenticated REST calls, caches query results under per-entity
//! tags, and invalidates those tags when a mutation succeeds so dependent
//! queries refetch.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod session;

pub use cache::{CacheTag, TagCache};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::Gateway;
pub use http::HttpClient;
pub use session::SessionData;

// Re-export shared types for convenience
pub use shared::{ApiResponse, ListQuery, LoginResponse, SidebarLink, UserInfo};
