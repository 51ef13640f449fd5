//! Room Type Model

use serde::{Deserialize, Serialize};

/// Room type catalog entry
///
/// Combines three independent facets (category, bed, AC), each a free-text
/// label. Immutable from the client; rooms reference one by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: i64,
    pub room_category_name: String,
    pub bed_type_name: String,
    pub ac_type_name: String,
}
