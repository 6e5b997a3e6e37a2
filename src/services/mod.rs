//! The two serialized front doors of the engine.
//!
//! Placements go through one actor and pickups through another, so two
//! placements never interleave and neither do two pickups. A placement and a
//! pickup may run at the same time; the engine's own locks keep them apart
//! where they touch the same storage.

pub mod pickup;
pub mod placement;

pub use pickup::PickupService;
pub use placement::PlacementService;

/// Mailbox capacity of each service actor.
pub const MAILBOX_SIZE: usize = 64;
