//! Facet resolution
//!
//! A room's type is picked through three independent selectors: category,
//! bed type, AC type. A full triple that exactly matches a catalog entry
//! resolves to that entry's id; anything less stays a per-room draft.

use shared::models::{Room, RoomType};
use std::collections::HashMap;

/// One of the three independent room-type attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Bed,
    Ac,
}

/// Per-room partial facet selection
///
/// Held only while the combination does not match any catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetDraft {
    pub category: Option<String>,
    pub bed: Option<String>,
    pub ac: Option<String>,
}

impl FacetDraft {
    /// Draft carrying the facets of a catalog entry
    pub fn from_room_type(room_type: &RoomType) -> Self {
        Self {
            category: Some(room_type.room_category_name.clone()),
            bed: Some(room_type.bed_type_name.clone()),
            ac: Some(room_type.ac_type_name.clone()),
        }
    }

    /// Set one facet, preserving the others
    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let value = Some(value.into());
        match facet {
            Facet::Category => self.category = value,
            Facet::Bed => self.bed = value,
            Facet::Ac => self.ac = value,
        }
    }

    /// Whether all three facets are chosen
    pub fn is_complete(&self) -> bool {
        self.category.is_some() && self.bed.is_some() && self.ac.is_some()
    }

    /// Exact, case-sensitive match against a catalog entry
    fn matches(&self, room_type: &RoomType) -> bool {
        self.category.as_deref() == Some(room_type.room_category_name.as_str())
            && self.bed.as_deref() == Some(room_type.bed_type_name.as_str())
            && self.ac.as_deref() == Some(room_type.ac_type_name.as_str())
    }
}

/// Outcome of a facet selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetOutcome {
    /// The full triple matched a catalog entry
    Resolved(i64),
    /// Still editing; the partial triple to keep as the room's draft
    Pending(FacetDraft),
}

/// Effective facet values for a room
///
/// A resolved `room_type_id` wins; otherwise the room's draft; otherwise
/// empty.
pub fn current_facets(
    room: &Room,
    drafts: &HashMap<i64, FacetDraft>,
    catalog: &[RoomType],
) -> FacetDraft {
    if let Some(type_id) = room.room_type_id
        && let Some(room_type) = catalog.iter().find(|t| t.id == type_id)
    {
        return FacetDraft::from_room_type(room_type);
    }
    drafts.get(&room.id).cloned().unwrap_or_default()
}

/// Resolve a changed facet for a room against the catalog
///
/// Merges the changed facet over the room's effective facets, then looks
/// for an exact triple match. First match in catalog order wins if the
/// catalog carries duplicate triples.
pub fn resolve_facet(
    room: &Room,
    drafts: &HashMap<i64, FacetDraft>,
    catalog: &[RoomType],
    facet: Facet,
    value: &str,
) -> FacetOutcome {
    let mut selection = current_facets(room, drafts, catalog);
    selection.set(facet, value);

    if selection.is_complete()
        && let Some(room_type) = catalog.iter().find(|t| selection.matches(t))
    {
        return FacetOutcome::Resolved(room_type.id);
    }

    FacetOutcome::Pending(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_type(id: i64, category: &str, bed: &str, ac: &str) -> RoomType {
        RoomType {
            id,
            room_category_name: category.to_string(),
            bed_type_name: bed.to_string(),
            ac_type_name: ac.to_string(),
        }
    }

    fn room(id: i64, room_type_id: Option<i64>) -> Room {
        Room {
            id,
            property_id: 1,
            name: format!("R{id}"),
            floor_number: 1,
            room_type_id,
            is_active: true,
        }
    }

    fn catalog() -> Vec<RoomType> {
        vec![
            room_type(9, "Deluxe", "King", "AC"),
            room_type(10, "Deluxe", "Twin", "AC"),
            room_type(11, "Standard", "King", "Non-AC"),
        ]
    }

    #[test]
    fn full_match_resolves() {
        let drafts = HashMap::from([(
            5,
            FacetDraft {
                category: Some("Deluxe".into()),
                bed: Some("King".into()),
                ac: None,
            },
        )]);
        let outcome = resolve_facet(&room(5, None), &drafts, &catalog(), Facet::Ac, "AC");
        assert_eq!(outcome, FacetOutcome::Resolved(9));
    }

    #[test]
    fn partial_selection_stays_pending() {
        let drafts = HashMap::new();
        let outcome = resolve_facet(&room(5, None), &drafts, &catalog(), Facet::Category, "Deluxe");
        assert_eq!(
            outcome,
            FacetOutcome::Pending(FacetDraft {
                category: Some("Deluxe".into()),
                bed: None,
                ac: None,
            })
        );
    }

    #[test]
    fn complete_but_unknown_triple_stays_pending() {
        let drafts = HashMap::from([(
            5,
            FacetDraft {
                category: Some("Standard".into()),
                bed: Some("King".into()),
                ac: None,
            },
        )]);
        let outcome = resolve_facet(&room(5, None), &drafts, &catalog(), Facet::Ac, "AC");
        // (Standard, King, AC) is not in the catalog
        assert!(matches!(outcome, FacetOutcome::Pending(ref d) if d.is_complete()));
    }

    #[test]
    fn resolved_type_provides_other_facets() {
        // Room already typed Deluxe/King/AC; switching bed to Twin resolves to 10
        let drafts = HashMap::new();
        let outcome = resolve_facet(&room(5, Some(9)), &drafts, &catalog(), Facet::Bed, "Twin");
        assert_eq!(outcome, FacetOutcome::Resolved(10));
    }

    #[test]
    fn match_is_case_sensitive() {
        let drafts = HashMap::new();
        let outcome = resolve_facet(&room(5, Some(9)), &drafts, &catalog(), Facet::Bed, "king");
        assert!(matches!(outcome, FacetOutcome::Pending(_)));
    }

    #[test]
    fn duplicate_triples_pick_first_in_catalog_order() {
        let mut cat = catalog();
        cat.push(room_type(99, "Deluxe", "King", "AC"));
        let drafts = HashMap::new();
        let outcome = resolve_facet(&room(5, Some(10)), &drafts, &cat, Facet::Bed, "King");
        assert_eq!(outcome, FacetOutcome::Resolved(9));
    }
}
