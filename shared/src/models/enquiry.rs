//! Enquiry Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact enquiry entity (from the marketing pages)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
    pub is_resolved: bool,
}

/// Update enquiry payload (mark handled, annotate)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnquiryUpdate {
    pub is_resolved: Option<bool>,
}
