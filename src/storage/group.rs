//! A group of storage units sharing one temperature class.

use crate::model::{OrderId, StoredOrder, Temperature};
use crate::storage::StorageUnit;
use parking_lot::RwLock;
use tracing::debug;

/// Storage units of one temperature class, filled first-fit in declaration order.
///
/// The group lock serializes membership changes (`add`, `remove`) across its
/// units; aggregate reads (`is_full`, `least_fresh`, `list`) share it.
///
/// Membership changes are crate-internal, so every one of them goes through
/// the engine and lands in the action log:
///
/// ```compile_fail
/// use fulfillment::config::FulfillmentConfig;
/// use fulfillment::engine::FulfillmentEngine;
/// use fulfillment::model::{Order, StoredOrder, Temperature};
/// use std::time::Duration;
///
/// let engine = FulfillmentEngine::new(&FulfillmentConfig::default());
/// let order = Order::new("ghost", "Soup", Temperature::Room, Duration::from_secs(5));
/// engine.shelf().add(StoredOrder::new(order));
/// ```
#[derive(Debug)]
pub struct StorageGroup {
    temperature: Temperature,
    units: Vec<StorageUnit>,
    membership: RwLock<()>,
}

impl StorageGroup {
    pub fn new(temperature: Temperature, units: Vec<StorageUnit>) -> Self {
        Self {
            temperature,
            units,
            membership: RwLock::new(()),
        }
    }

    /// Builds `count` units of `capacity` each, named `{prefix}-1`, `{prefix}-2`, ...
    pub fn with_units(
        temperature: Temperature,
        prefix: &str,
        count: usize,
        capacity: usize,
    ) -> Self {
        let units = (1..=count)
            .map(|n| StorageUnit::new(format!("{prefix}-{n}"), capacity))
            .collect();
        Self::new(temperature, units)
    }

    /// Temperature class this group keeps orders at.
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn units(&self) -> &[StorageUnit] {
        &self.units
    }

    /// Places the order in the first unit with room.
    #[allow(dead_code)]
    pub(crate) fn add(&self, order: StoredOrder) -> bool {
        self.add_with(order, |_| {})
    }

    /// Removes the order from the first unit holding it.
    #[allow(dead_code)]
    pub(crate) fn remove(&self, id: &OrderId) -> Option<StoredOrder> {
        self.remove_with(id, |_| {})
    }

    /// True only when every unit is full; a group without units is full.
    pub fn is_full(&self) -> bool {
        let _membership = self.membership.read();
        self.units.iter().all(StorageUnit::is_full)
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        let _membership = self.membership.read();
        self.units.iter().any(|unit| unit.contains(id))
    }

    pub fn len(&self) -> usize {
        let _membership = self.membership.read();
        self.units.iter().map(StorageUnit::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The held order with the lowest remaining freshness, judged by how this
    /// group stores it. Ties go to the first order encountered.
    pub fn least_fresh(&self) -> Option<StoredOrder> {
        let _membership = self.membership.read();
        let mut least: Option<(StoredOrder, chrono::TimeDelta)> = None;
        for unit in &self.units {
            for order in unit.list() {
                let remaining = order.remaining_freshness(self.temperature);
                match &least {
                    Some((_, lowest)) if remaining >= *lowest => {}
                    _ => least = Some((order, remaining)),
                }
            }
        }
        least.map(|(order, _)| order)
    }

    /// Snapshot of every unit's orders, in unit order.
    pub fn list(&self) -> Vec<StoredOrder> {
        let _membership = self.membership.read();
        self.units.iter().flat_map(StorageUnit::list).collect()
    }

    pub(crate) fn add_with(&self, order: StoredOrder, on_commit: impl Fn(&StoredOrder)) -> bool {
        let _membership = self.membership.write();
        for unit in &self.units {
            if unit.is_full() {
                continue;
            }
            if unit.add_with(order.clone(), &on_commit) {
                debug!(unit = unit.name(), order_id = %order.order.id, "Stored");
                return true;
            }
        }
        false
    }

    pub(crate) fn remove_with(
        &self,
        id: &OrderId,
        on_commit: impl Fn(&StoredOrder),
    ) -> Option<StoredOrder> {
        let _membership = self.membership.write();
        self.units
            .iter()
            .find_map(|unit| unit.remove_with(id, &on_commit))
    }
}
