//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`FulfillmentSystem`] - Starts the engine, its actors and the reallocator, and stops them
//! - [`run_harness`] - Drives a system with a stream of orders and randomized pickups
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod harness;
pub mod system;
pub mod tracing;

pub use harness::{run_harness, HarnessOptions};
pub use system::FulfillmentSystem;
pub use tracing::setup_tracing;
