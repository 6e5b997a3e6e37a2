//! The storage-allocation and freshness-eviction engine.
//!
//! - [`FulfillmentEngine`] - placement, pickup, atomic moves and discards
//! - [`ActionLog`] - the ordered history of everything the engine did
//! - [`Reallocator`] - the background loop that drains a full shelf into freed
//!   ideal storage

pub mod action_log;
pub mod fulfillment;
pub mod reallocator;

pub use action_log::ActionLog;
pub use fulfillment::FulfillmentEngine;
pub use reallocator::{Reallocator, StopSignal};
