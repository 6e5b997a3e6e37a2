use crate::clients::EngineError;
use crate::framework::ServiceClient;
use crate::model::{Order, OrderId};
use crate::services::{PickupService, PlacementService};
use tracing::{debug, instrument};

/// Client for placing and picking up orders.
///
/// Cheap to clone; every clone talks to the same two actors. `Ok(())` means
/// the request was processed, not that the order was stored or found.
#[derive(Clone)]
pub struct FulfillmentClient {
    placement: ServiceClient<PlacementService>,
    pickup: ServiceClient<PickupService>,
}

impl FulfillmentClient {
    pub fn new(
        placement: ServiceClient<PlacementService>,
        pickup: ServiceClient<PickupService>,
    ) -> Self {
        Self { placement, pickup }
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn place_order(&self, order: Order) -> Result<(), EngineError> {
        debug!(?order, "place_order called");
        self.placement.call(order).await.map_err(EngineError::from)
    }

    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn pickup_order(&self, id: OrderId) -> Result<(), EngineError> {
        self.pickup.call(id).await.map_err(EngineError::from)
    }
}
