//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking status as reported by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Enquiry,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub property_id: i64,
    pub room_id: Option<i64>,
    pub guest_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    /// Quoted tariff in paise
    pub tariff: i64,
    pub notes: Option<String>,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub property_id: i64,
    pub room_id: Option<i64>,
    pub guest_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: Option<u32>,
    pub tariff: i64,
    pub notes: Option<String>,
}

/// Update booking payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub room_id: Option<i64>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub tariff: Option<i64>,
    pub notes: Option<String>,
}
