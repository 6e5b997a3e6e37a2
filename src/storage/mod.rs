//! Bounded storage: single units and the temperature groups built from them.
//!
//! Units own their orders behind their own lock. Groups add a membership lock
//! on top so that placement and removal across units are serialized. Lock
//! order is always group before unit.

pub mod group;
pub mod unit;

pub use group::StorageGroup;
pub use unit::StorageUnit;
