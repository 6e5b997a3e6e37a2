//! # Framework Errors
//!
//! Transport failures between a [`ServiceClient`](crate::framework::ServiceClient)
//! and its [`ServiceActor`](crate::framework::ServiceActor). Domain outcomes never
//! travel through this type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
