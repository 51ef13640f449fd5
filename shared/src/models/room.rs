//! Room Model

use serde::{Deserialize, Serialize};

/// Room entity (one physical room)
///
/// Created server-side, mutated via bulk type reassignment or single-room
/// create, never deleted from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    /// Floor the room sits on; non-negative
    pub floor_number: u32,
    /// Assigned room type, if any
    pub room_type_id: Option<i64>,
    pub is_active: bool,
}

/// Room list envelope returned by the rooms endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<Room>,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub property_id: i64,
    pub floor_number: u32,
    pub room_type_id: i64,
}

/// One element of the bulk room-type update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeChange {
    pub id: i64,
    pub room_type_id: i64,
}
