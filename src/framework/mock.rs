//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to script the responses a service would give, or
//! [`create_mock_client`] to get a client and the raw receiving end of its
//! mailbox.

use crate::framework::{FrameworkError, Service, ServiceClient, ServiceRequest};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

struct MockState<S: Service> {
    expectations: VecDeque<Result<S::Response, FrameworkError>>,
    received: Vec<S::Request>,
    unexpected: usize,
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockClient::<PlacementService>::new();
/// mock.expect_request().return_ok(());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: Service> {
    client: ServiceClient<S>,
    state: Arc<Mutex<MockState<S>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Service> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ServiceRequest<S>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: Vec::new(),
            unexpected: 0,
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(ServiceRequest {
                request,
                respond_to,
            }) = receiver.recv().await
            {
                let next = {
                    let mut state = task_state.lock();
                    state.received.push(request);
                    let next = state.expectations.pop_front();
                    if next.is_none() {
                        state.unexpected += 1;
                    }
                    next
                };
                // Without an expectation the responder is dropped and the
                // caller sees ActorDropped.
                if let Some(response) = next {
                    let _ = respond_to.send(response);
                }
            }
        });

        Self {
            client: ServiceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ServiceClient<S> {
        self.client.clone()
    }

    /// Expects one more request.
    pub fn expect_request(&self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Requests received so far, in arrival order.
    pub fn received(&self) -> Vec<S::Request>
    where
        S::Request: Clone,
    {
        self.state.lock().received.clone()
    }

    /// Verifies that all expectations were met and nothing else arrived.
    pub fn verify(&self) {
        let state = self.state.lock();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
        if state.unexpected > 0 {
            panic!("Received {} unexpected requests", state.unexpected);
        }
    }
}

impl<S: Service> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single expected request.
pub struct ExpectationBuilder<S: Service> {
    state: Arc<Mutex<MockState<S>>>,
}

impl<S: Service> ExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, response: S::Response) {
        self.state.lock().expectations.push_back(Ok(response));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.state.lock().expectations.push_back(Err(error));
    }
}

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it takes requests off the receiver and answers
/// through each request's `respond_to`.
pub fn create_mock_client<S: Service>(
    buffer_size: usize,
) -> (ServiceClient<S>, mpsc::Receiver<ServiceRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceClient::new(sender), receiver)
}
