//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod geometry;
pub mod gesture;
pub mod state;
pub mod tick;

pub use autopilot::{Autopilot, PointerAction};
pub use body::{Body, BodyKind, Rgb};
pub use geometry::{closest_point_on_segment, segment_intersects_circle};
pub use gesture::GestureTrail;
pub use state::{FadingTrail, GameEvent, GamePhase, SessionState, Snapshot, Splatter};
pub use tick::{SliceOutcome, resolve_slice, slice_target, spawn_objects, tick, trigger_hazard};
