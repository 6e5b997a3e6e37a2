//! # Service Trait
//!
//! The contract a request handler implements to be driven by a
//! [`ServiceActor`](crate::framework::ServiceActor). The actor owns the service
//! and calls [`Service::handle`] for one request at a time, so whatever the
//! service does is serialized against every other request sent to the same
//! actor.

use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait Service: Send + 'static {
    /// Message accepted by the service.
    type Request: Send + Debug + 'static;

    /// Reply sent back to the caller once the request is handled.
    type Response: Send + Debug + 'static;

    /// Handles a single request.
    async fn handle(&mut self, request: Self::Request) -> Self::Response;
}
