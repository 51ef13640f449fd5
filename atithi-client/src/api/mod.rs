//! Typed API surface
//!
//! One module per business entity. Each module is an `impl Gateway` block:
//! reads go through the tag cache, writes name the tags they invalidate.

pub mod auth;
pub mod bookings;
pub mod enquiries;
pub mod guests;
pub mod kitchen;
pub mod laundry;
pub mod menu;
pub mod payments;
pub mod properties;
pub mod restaurant;
pub mod rooms;
pub mod staff;
pub mod vehicles;
pub mod vendors;
