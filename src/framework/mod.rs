//! Generic mailbox framework.
//!
//! Each actor owns one [`Service`] and handles its requests sequentially, so
//! every call routed through the same actor is serialized.
//!
//! # Main Components
//!
//! - [`Service`] - Trait that request handlers implement to be driven by an actor
//! - [`ServiceActor`] - Generic actor that owns a service and its mailbox
//! - [`ServiceClient`] - Type-safe, cloneable handle for calling an actor
//! - [`FrameworkError`] - Transport errors between client and actor
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod service;

pub use actor::ServiceActor;
pub use client::ServiceClient;
pub use error::FrameworkError;
pub use message::{Response, ServiceRequest};
pub use service::Service;
