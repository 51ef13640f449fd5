//! Data models
//!
//! Shared between the gateway crate and the console crate. Mirrors the
//! remote API's wire shapes. All IDs are `i64`.

pub mod booking;
pub mod dining_table;
pub mod enquiry;
pub mod guest;
pub mod kitchen;
pub mod laundry;
pub mod menu;
pub mod payment;
pub mod property;
pub mod restaurant_order;
pub mod room;
pub mod room_type;
pub mod staff;
pub mod vehicle;
pub mod vendor;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use enquiry::*;
pub use guest::*;
pub use kitchen::*;
pub use laundry::*;
pub use menu::*;
pub use payment::*;
pub use property::*;
pub use restaurant_order::*;
pub use room::*;
pub use room_type::*;
pub use staff::*;
pub use vehicle::*;
pub use vendor::*;
