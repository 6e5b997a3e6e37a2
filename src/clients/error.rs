use crate::framework::FrameworkError;
use thiserror::Error;

/// Failures at the client and lifecycle boundary.
///
/// Operational outcomes (placed, moved, discarded, dropped, not found) are not
/// errors; they show up in the action log only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The system has been shut down.
    #[error("Fulfillment system is shut down")]
    ActorClosed,

    /// An actor stopped before answering.
    #[error("Fulfillment actor stopped before responding")]
    ActorDropped,

    /// A background task panicked or was cancelled.
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl From<FrameworkError> for EngineError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed => EngineError::ActorClosed,
            FrameworkError::ActorDropped => EngineError::ActorDropped,
        }
    }
}
