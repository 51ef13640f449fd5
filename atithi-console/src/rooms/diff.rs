//! Minimal diff for bulk submission
//!
//! Compares the working room list against the last-fetched authoritative
//! snapshot by id. Rooms with an unresolved draft and no resolved type are
//! never submitted.

use shared::models::{Room, RoomTypeChange};
use std::collections::HashMap;

/// Rooms whose effective type changed, in working-list order
///
/// A room is included iff its working `room_type_id` is set and differs
/// from the baseline value for the same id. A room the baseline does not
/// know is skipped; it has nothing to be reconciled against.
pub fn room_diff(working: &[Room], baseline: &[Room]) -> Vec<RoomTypeChange> {
    let base: HashMap<i64, Option<i64>> =
        baseline.iter().map(|r| (r.id, r.room_type_id)).collect();

    working
        .iter()
        .filter_map(|room| {
            let room_type_id = room.room_type_id?;
            match base.get(&room.id) {
                Some(&baseline_type) if baseline_type != Some(room_type_id) => {
                    Some(RoomTypeChange {
                        id: room.id,
                        room_type_id,
                    })
                }
                _ => None,
            }
        })
        .collect()
}
