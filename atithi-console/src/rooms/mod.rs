//! Floor/room reconciliation
//!
//! Maintains an editable, floor-grouped view of a property's rooms, resolves
//! three-facet type selections against the room-type catalog, and produces
//! the minimal diff to submit as one bulk update.

pub mod diff;
pub mod editor;
pub mod facet;
pub mod floor_plan;

pub use diff::room_diff;
pub use editor::RoomEditor;
pub use facet::{current_facets, resolve_facet, Facet, FacetDraft, FacetOutcome};
pub use floor_plan::{compute_floor_groups, next_floor, FloorGroup};
