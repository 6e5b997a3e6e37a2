//! # Generic Actor
//!
//! The server half of a mailbox: owns a [`Service`] and the receiving end of
//! its channel.

use crate::framework::{Service, ServiceClient, ServiceRequest};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Drives a [`Service`] from its mailbox.
///
/// Requests are handled strictly one after another, in arrival order. The loop
/// ends when every [`ServiceClient`] has been dropped and the mailbox is
/// drained.
pub struct ServiceActor<S: Service> {
    receiver: mpsc::Receiver<ServiceRequest<S>>,
    service: S,
}

impl<S: Service> ServiceActor<S> {
    pub fn new(service: S, buffer_size: usize) -> (Self, ServiceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        (actor, ServiceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // "PlacementService" rather than "fulfillment::services::placement::PlacementService"
        let service_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(ServiceRequest {
            request,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(service_type, ?request, "Request");
            let response = self.service.handle(request).await;
            handled += 1;
            if respond_to.send(Ok(response)).is_err() {
                warn!(service_type, "Caller went away before the response");
            }
        }

        info!(service_type, handled, "Shutdown");
    }
}
