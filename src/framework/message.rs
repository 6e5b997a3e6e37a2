//! # Mailbox Messages
//!
//! The envelope carried from a client to its actor.

use crate::framework::{FrameworkError, Service};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request plus the channel its response goes back on.
pub struct ServiceRequest<S: Service> {
    pub request: S::Request,
    pub respond_to: Response<S::Response>,
}
