//! Client error types

use thiserror::Error;

/// Client error type
///
/// HTTP statuses from the remote API map onto the typed variants; anything
/// else the server reports lands in [`ClientError::Server`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response did not match the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Session missing or expired (401); the session is cleared when this
    /// surfaces
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected input (400), including client-side validation before a call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-reported failure (5xx or a non-success envelope code)
    #[error("Server error: {0}")]
    Server(String),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
