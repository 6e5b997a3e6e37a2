//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::framework::{FrameworkError, Service, ServiceRequest};
use tokio::sync::{mpsc, oneshot};

/// ## ServiceClient
///
/// The sending half of a [`ServiceActor`](crate::framework::ServiceActor)'s
/// mailbox. Holds only a sender, so it is cheap to clone and share across
/// tasks. The actor stops once every clone is dropped.
pub struct ServiceClient<S: Service> {
    sender: mpsc::Sender<ServiceRequest<S>>,
}

impl<S: Service> Clone for ServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Service> ServiceClient<S> {
    pub fn new(sender: mpsc::Sender<ServiceRequest<S>>) -> Self {
        Self { sender }
    }

    /// Sends a request and waits for the actor to finish handling it.
    pub async fn call(&self, request: S::Request) -> Result<S::Response, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ServiceRequest {
                request,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Whether the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
