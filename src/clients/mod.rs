//! Typed async call surface over the service actors.

pub mod error;
pub mod fulfillment_client;

pub use error::EngineError;
pub use fulfillment_client::FulfillmentClient;
