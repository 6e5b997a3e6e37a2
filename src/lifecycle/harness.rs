//! Order-stream simulation.

use crate::clients::{EngineError, FulfillmentClient};
use crate::model::{Order, OrderId};
use rand::Rng;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Pacing of a simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Delay between consecutive placements.
    pub rate: Duration,
    /// Shortest courier delay after placement.
    pub min_pickup: Duration,
    /// Courier delays are drawn from `[min_pickup, max_pickup)`.
    pub max_pickup: Duration,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            rate: Duration::from_millis(500),
            min_pickup: Duration::from_secs(4),
            max_pickup: Duration::from_secs(8),
        }
    }
}

impl HarnessOptions {
    /// Random courier delay; exactly `min_pickup` when the range is empty.
    pub fn pickup_delay(&self) -> Duration {
        if self.max_pickup <= self.min_pickup {
            return self.min_pickup;
        }
        rand::thread_rng().gen_range(self.min_pickup..self.max_pickup)
    }
}

/// Places every order at `options.rate` and sends a courier for each after a
/// random delay. Returns once every courier has finished.
///
/// The first transport failure is returned after all couriers are done.
pub async fn run_harness(
    client: &FulfillmentClient,
    orders: Vec<Order>,
    options: HarnessOptions,
) -> Result<(), EngineError> {
    info!(orders = orders.len(), ?options, "Harness started");
    let mut couriers = JoinSet::new();

    for (index, order) in orders.into_iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(options.rate).await;
        }
        let id: OrderId = order.id.clone();
        let delay = options.pickup_delay();
        let client = client.clone();
        couriers.spawn(async move {
            client.place_order(order).await?;
            tokio::time::sleep(delay).await;
            client.pickup_order(id).await
        });
    }

    let mut result = Ok(());
    while let Some(joined) = couriers.join_next().await {
        let outcome = joined
            .map_err(|e| EngineError::TaskFailed(e.to_string()))
            .and_then(|r| r);
        if let Err(e) = outcome {
            warn!(error = %e, "Courier failed");
            if result.is_ok() {
                result = Err(e);
            }
        }
    }
    info!("Harness finished");
    result
}
