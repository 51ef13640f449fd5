//! AtithiFlow Console - client-side view state
//!
//! The logic behind the authenticated screens that is independent of any
//! rendering layer: the floor/room reconciliation engine and the per-route
//! permission resolver. Everything here is synchronous and pure apart from
//! the explicit gateway submit call.

pub mod permissions;
pub mod rooms;

pub use permissions::{Capabilities, PermissionResolver};
pub use rooms::{
    compute_floor_groups, current_facets, next_floor, resolve_facet, room_diff, Facet, FacetDraft,
    FacetOutcome, FloorGroup, RoomEditor,
};
