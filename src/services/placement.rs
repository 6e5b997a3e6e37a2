use crate::engine::FulfillmentEngine;
use crate::framework::{Service, ServiceActor, ServiceClient};
use crate::model::Order;
use crate::services::MAILBOX_SIZE;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Places orders into storage, one at a time.
pub struct PlacementService {
    engine: Arc<FulfillmentEngine>,
}

impl PlacementService {
    pub fn new(engine: Arc<FulfillmentEngine>) -> (ServiceActor<Self>, ServiceClient<Self>) {
        ServiceActor::new(Self { engine }, MAILBOX_SIZE)
    }
}

#[async_trait]
impl Service for PlacementService {
    type Request = Order;
    type Response = ();

    #[instrument(name = "place", skip(self, order), fields(order_id = %order.id))]
    async fn handle(&mut self, order: Order) {
        self.engine.place_order(order);
    }
}
