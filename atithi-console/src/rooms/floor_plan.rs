//! Floor grouping
//!
//! Derived, non-persisted view: rooms grouped by floor number ascending,
//! plus floors added in the UI that have no rooms yet. Fully rebuilt on
//! every call, never patched incrementally.

use shared::models::Room;
use std::collections::{BTreeMap, BTreeSet};

/// One floor and the rooms on it, in source-list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorGroup {
    pub floor_number: u32,
    pub rooms: Vec<Room>,
}

/// Group rooms by floor, ascending, with empty groups for added floors
pub fn compute_floor_groups(rooms: &[Room], added_floors: &BTreeSet<u32>) -> Vec<FloorGroup> {
    let mut groups: BTreeMap<u32, Vec<Room>> = BTreeMap::new();
    for room in rooms {
        groups.entry(room.floor_number).or_default().push(room.clone());
    }
    for &floor in added_floors {
        groups.entry(floor).or_default();
    }
    groups
        .into_iter()
        .map(|(floor_number, rooms)| FloorGroup { floor_number, rooms })
        .collect()
}

/// Next sequential floor after the highest observed or added floor
///
/// A property with no rooms and no added floors starts at floor 1.
pub fn next_floor(rooms: &[Room], added_floors: &BTreeSet<u32>) -> u32 {
    rooms
        .iter()
        .map(|r| r.floor_number)
        .chain(added_floors.iter().copied())
        .max()
        .map_or(1, |m| m + 1)
}
