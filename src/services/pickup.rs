use crate::engine::FulfillmentEngine;
use crate::framework::{Service, ServiceActor, ServiceClient};
use crate::model::OrderId;
use crate::services::MAILBOX_SIZE;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Hands orders to couriers, one at a time.
pub struct PickupService {
    engine: Arc<FulfillmentEngine>,
}

impl PickupService {
    pub fn new(engine: Arc<FulfillmentEngine>) -> (ServiceActor<Self>, ServiceClient<Self>) {
        ServiceActor::new(Self { engine }, MAILBOX_SIZE)
    }
}

#[async_trait]
impl Service for PickupService {
    type Request = OrderId;
    type Response = ();

    #[instrument(name = "pickup", skip(self), fields(order_id = %id))]
    async fn handle(&mut self, id: OrderId) {
        self.engine.pickup_order(&id);
    }
}
