use crate::clients::{EngineError, FulfillmentClient};
use crate::config::FulfillmentConfig;
use crate::engine::{FulfillmentEngine, Reallocator, StopSignal};
use crate::model::Action;
use crate::services::{PickupService, PlacementService};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running facility.
///
/// Owns the engine, the placement and pickup actors, and the background
/// reallocation loop.
///
/// # Example
///
/// ```ignore
/// let system = FulfillmentSystem::start(&config);
///
/// system.client.place_order(order).await?;
/// system.client.pickup_order(id).await?;
///
/// let log = system.shutdown().await?;
/// ```
pub struct FulfillmentSystem {
    /// Client for placing and picking up orders
    pub client: FulfillmentClient,

    engine: Arc<FulfillmentEngine>,
    stop: StopSignal,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl FulfillmentSystem {
    /// Builds the storage described by `config` and spawns every task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &FulfillmentConfig) -> Self {
        let engine = Arc::new(FulfillmentEngine::new(config));

        let (placement_actor, placement) = PlacementService::new(engine.clone());
        let (pickup_actor, pickup) = PickupService::new(engine.clone());
        let (reallocator, stop) = Reallocator::new(engine.clone(), config.reallocation_interval());

        let handles = vec![
            tokio::spawn(placement_actor.run()),
            tokio::spawn(pickup_actor.run()),
            tokio::spawn(reallocator.run()),
        ];
        info!(
            coolers = engine.cooler().units().len(),
            heaters = engine.heater().units().len(),
            shelves = engine.shelf().units().len(),
            "Fulfillment system started"
        );

        Self {
            client: FulfillmentClient::new(placement, pickup),
            engine,
            stop,
            handles,
        }
    }

    /// Read-only view of the engine, for diagnostics and tests.
    pub fn engine(&self) -> &FulfillmentEngine {
        &self.engine
    }

    /// Stops the reallocator, closes the actors' mailboxes and waits for every
    /// task. Returns the complete action log.
    ///
    /// Requests still queued in a mailbox are handled before its actor exits.
    /// Clones of [`FulfillmentSystem::client`] held elsewhere keep their actor
    /// alive, so drop them first.
    pub async fn shutdown(self) -> Result<Vec<Action>, EngineError> {
        info!("Shutting down system...");

        self.stop.stop();
        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(EngineError::TaskFailed(e.to_string()));
            }
        }

        let actions = self.engine.actions().snapshot();
        info!(actions = actions.len(), "System shutdown complete.");
        Ok(actions)
    }
}
