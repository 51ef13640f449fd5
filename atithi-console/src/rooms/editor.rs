//! Room editor
//!
//! Stateful wrapper over one property's room snapshot: facet selections,
//! floors added in the UI, and the pending diff. All transitions are
//! synchronous; the only network call is the explicit submit.

use super::diff::room_diff;
use super::facet::{current_facets, resolve_facet, Facet, FacetDraft, FacetOutcome};
use super::floor_plan::{compute_floor_groups, next_floor, FloorGroup};
use atithi_client::{ClientResult, Gateway};
use shared::models::{Room, RoomCreate, RoomType, RoomTypeChange};
use std::collections::{BTreeSet, HashMap};

/// Editable view of a property's rooms
#[derive(Debug, Default)]
pub struct RoomEditor {
    property_id: i64,
    /// Last-fetched authoritative snapshot (diff baseline)
    baseline: Vec<Room>,
    /// Working copy the operator edits
    working: Vec<Room>,
    catalog: Vec<RoomType>,
    /// Unresolved per-room facet selections
    drafts: HashMap<i64, FacetDraft>,
    /// Floors created in the UI with no rooms yet
    added_floors: BTreeSet<u32>,
}

impl RoomEditor {
    /// Create an editor over a fresh snapshot
    pub fn new(property_id: i64, rooms: Vec<Room>, catalog: Vec<RoomType>) -> Self {
        Self {
            property_id,
            baseline: rooms.clone(),
            working: rooms,
            catalog,
            drafts: HashMap::new(),
            added_floors: BTreeSet::new(),
        }
    }

    /// Replace the authoritative snapshot
    ///
    /// Called when a background refetch lands mid-edit. Pending resolved
    /// reassignments and drafts survive keyed by room id and are re-applied
    /// on top of the new snapshot; entries for rooms that no longer exist
    /// are dropped. The diff baseline shifts to the new snapshot, so an
    /// edit the snapshot already reflects drops out of the diff.
    pub fn load_snapshot(&mut self, rooms: Vec<Room>) {
        let overrides: HashMap<i64, i64> = room_diff(&self.working, &self.baseline)
            .into_iter()
            .map(|c| (c.id, c.room_type_id))
            .collect();

        self.baseline = rooms.clone();
        self.working = rooms;
        for room in &mut self.working {
            if let Some(&type_id) = overrides.get(&room.id) {
                room.room_type_id = Some(type_id);
            }
        }

        let working = &self.working;
        self.drafts.retain(|id, _| working.iter().any(|r| r.id == *id));
        tracing::debug!(
            property_id = self.property_id,
            rooms = self.working.len(),
            surviving_drafts = self.drafts.len(),
            "snapshot reloaded"
        );
    }

    /// Replace the room-type catalog
    pub fn set_catalog(&mut self, catalog: Vec<RoomType>) {
        self.catalog = catalog;
    }

    /// Working room list
    pub fn rooms(&self) -> &[Room] {
        &self.working
    }

    /// Draft for a room, if one is held
    pub fn draft(&self, room_id: i64) -> Option<&FacetDraft> {
        self.drafts.get(&room_id)
    }

    /// Effective facet values shown in a room's selectors
    pub fn facets(&self, room_id: i64) -> Option<FacetDraft> {
        self.working
            .iter()
            .find(|r| r.id == room_id)
            .map(|room| current_facets(room, &self.drafts, &self.catalog))
    }

    /// Apply a facet selection to a room
    ///
    /// Returns `None` for an unknown room id. A resolved triple updates the
    /// working room's type in place and clears any draft; an unresolved one
    /// is stored as the room's draft with `room_type_id` untouched.
    pub fn select_facet(&mut self, room_id: i64, facet: Facet, value: &str) -> Option<FacetOutcome> {
        let index = self.working.iter().position(|r| r.id == room_id)?;
        let outcome = resolve_facet(
            &self.working[index],
            &self.drafts,
            &self.catalog,
            facet,
            value,
        );

        match &outcome {
            FacetOutcome::Resolved(type_id) => {
                self.working[index].room_type_id = Some(*type_id);
                self.drafts.remove(&room_id);
                tracing::debug!(room_id, type_id, "room type resolved");
            }
            FacetOutcome::Pending(draft) => {
                self.drafts.insert(room_id, draft.clone());
            }
        }

        Some(outcome)
    }

    /// Add the next sequential floor, returning its number
    pub fn add_floor(&mut self) -> u32 {
        let floor = next_floor(&self.working, &self.added_floors);
        self.added_floors.insert(floor);
        floor
    }

    /// Current floor grouping, rebuilt from scratch
    pub fn floor_groups(&self) -> Vec<FloorGroup> {
        compute_floor_groups(&self.working, &self.added_floors)
    }

    /// Minimal diff against the authoritative snapshot
    ///
    /// Empty when nothing effectively changed; callers disable submission
    /// on an empty diff.
    pub fn pending_changes(&self) -> Vec<RoomTypeChange> {
        room_diff(&self.working, &self.baseline)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending_changes().is_empty()
    }

    /// Advance the baseline after a confirmed bulk update
    pub fn mark_submitted(&mut self) {
        self.baseline = self.working.clone();
    }

    /// Payload for creating one room on a floor
    ///
    /// The triple must resolve to a known catalog entry; `None` means the
    /// combination is invalid and the add-room dialog stays open.
    pub fn room_create_payload(
        &self,
        floor_number: u32,
        category: &str,
        bed: &str,
        ac: &str,
    ) -> Option<RoomCreate> {
        let selection = FacetDraft {
            category: Some(category.to_string()),
            bed: Some(bed.to_string()),
            ac: Some(ac.to_string()),
        };
        self.catalog
            .iter()
            .find(|t| FacetDraft::from_room_type(t) == selection)
            .map(|room_type| RoomCreate {
                property_id: self.property_id,
                floor_number,
                room_type_id: room_type.id,
            })
    }

    /// Submit the pending diff as one bulk update
    ///
    /// A no-op on an empty diff. On success the baseline advances and the
    /// gateway's rooms tag is already invalidated; on failure the edit
    /// state is left untouched so the operator can retry.
    pub async fn submit(&mut self, gateway: &Gateway) -> ClientResult<usize> {
        let changes = self.pending_changes();
        if changes.is_empty() {
            return Ok(0);
        }

        gateway.bulk_update_rooms(self.property_id, &changes).await?;
        self.mark_submitted();
        tracing::info!(
            property_id = self.property_id,
            count = changes.len(),
            "bulk room update submitted"
        );
        Ok(changes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64, floor: u32, room_type_id: Option<i64>) -> Room {
        Room {
            id,
            property_id: 1,
            name: format!("R{id}"),
            floor_number: floor,
            room_type_id,
            is_active: true,
        }
    }

    fn room_type(id: i64, category: &str, bed: &str, ac: &str) -> RoomType {
        RoomType {
            id,
            room_category_name: category.to_string(),
            bed_type_name: bed.to_string(),
            ac_type_name: ac.to_string(),
        }
    }

    fn editor() -> RoomEditor {
        RoomEditor::new(
            1,
            vec![room(5, 2, None), room(7, 1, Some(3))],
            vec![
                room_type(3, "Standard", "King", "Non-AC"),
                room_type(4, "Standard", "King", "AC"),
                room_type(9, "Deluxe", "King", "AC"),
            ],
        )
    }

    #[test]
    fn resolved_selection_clears_draft_and_enters_diff() {
        let mut e = editor();
        e.select_facet(5, Facet::Category, "Deluxe");
        e.select_facet(5, Facet::Bed, "King");
        assert!(e.draft(5).is_some());
        assert!(e.pending_changes().is_empty());

        let outcome = e.select_facet(5, Facet::Ac, "AC").unwrap();
        assert_eq!(outcome, FacetOutcome::Resolved(9));
        assert!(e.draft(5).is_none());
        assert_eq!(
            e.pending_changes(),
            [RoomTypeChange {
                id: 5,
                room_type_id: 9
            }]
        );
    }

    #[test]
    fn revert_produces_empty_diff() {
        let mut e = editor();
        // 3 -> 4 (AC) and back to 3 (Non-AC)
        e.select_facet(7, Facet::Ac, "AC");
        assert!(e.has_pending_changes());
        e.select_facet(7, Facet::Ac, "Non-AC");
        assert!(!e.has_pending_changes());
    }

    #[test]
    fn snapshot_reload_keeps_drafts_and_overrides() {
        let mut e = editor();
        e.select_facet(5, Facet::Category, "Deluxe");
        e.select_facet(7, Facet::Ac, "AC"); // resolves to 4

        e.load_snapshot(vec![room(5, 2, None), room(7, 1, Some(3)), room(8, 3, None)]);

        assert_eq!(e.draft(5).unwrap().category.as_deref(), Some("Deluxe"));
        assert_eq!(
            e.pending_changes(),
            [RoomTypeChange {
                id: 7,
                room_type_id: 4
            }]
        );
    }

    #[test]
    fn snapshot_reflecting_edit_drops_it_from_diff() {
        let mut e = editor();
        e.select_facet(7, Facet::Ac, "AC"); // pending 3 -> 4
        // Another session already applied the same change
        e.load_snapshot(vec![room(5, 2, None), room(7, 1, Some(4))]);
        assert!(!e.has_pending_changes());
    }

    #[test]
    fn snapshot_reload_drops_state_for_vanished_rooms() {
        let mut e = editor();
        e.select_facet(5, Facet::Category, "Deluxe");
        e.load_snapshot(vec![room(7, 1, Some(3))]);
        assert!(e.draft(5).is_none());
        assert!(e.facets(5).is_none());
    }

    #[test]
    fn add_floor_is_sequential() {
        let mut e = editor();
        assert_eq!(e.add_floor(), 3);
        assert_eq!(e.add_floor(), 4);
        let floors: Vec<u32> = e.floor_groups().iter().map(|g| g.floor_number).collect();
        assert_eq!(floors, [1, 2, 3, 4]);
        assert!(e.floor_groups()[2].rooms.is_empty());
    }

    #[test]
    fn room_create_payload_requires_known_triple() {
        let e = editor();
        let payload = e.room_create_payload(2, "Deluxe", "King", "AC").unwrap();
        assert_eq!(payload.room_type_id, 9);
        assert_eq!(payload.floor_number, 2);
        assert!(e.room_create_payload(2, "Deluxe", "Twin", "AC").is_none());
    }

    #[test]
    fn mark_submitted_advances_baseline() {
        let mut e = editor();
        e.select_facet(7, Facet::Ac, "AC");
        assert!(e.has_pending_changes());
        e.mark_submitted();
        assert!(!e.has_pending_changes());
    }
}
