//! A single bounded storage unit (one cooler, one heater or one shelf).

use crate::model::{OrderId, StoredOrder};
use parking_lot::{RwLock, RwLockWriteGuard};
use std::collections::BTreeMap;

/// Orders held by one unit, ordered by id.
pub(crate) type UnitOrders = BTreeMap<OrderId, StoredOrder>;

/// A storage unit with a fixed capacity.
///
/// Invariant: the number of held orders never exceeds `capacity`.
/// Re-adding an id that is already held overwrites it in place.
///
/// Only the engine changes what a unit holds; outside the crate a unit is
/// read-only:
///
/// ```compile_fail
/// use fulfillment::config::FulfillmentConfig;
/// use fulfillment::engine::FulfillmentEngine;
/// use fulfillment::model::OrderId;
///
/// let engine = FulfillmentEngine::new(&FulfillmentConfig::default());
/// engine.heater().units()[0].remove(&OrderId::from("a"));
/// ```
#[derive(Debug)]
pub struct StorageUnit {
    name: String,
    capacity: usize,
    orders: RwLock<UnitOrders>,
}

impl StorageUnit {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            orders: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.orders.read().len() >= self.capacity
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.read().contains_key(id)
    }

    /// Copy of the stored order with this id, if held here.
    pub fn get(&self, id: &OrderId) -> Option<StoredOrder> {
        self.orders.read().get(id).cloned()
    }

    /// Point-in-time copy of the held orders.
    pub fn list(&self) -> Vec<StoredOrder> {
        self.orders.read().values().cloned().collect()
    }

    /// Inserts the order if there is room (or overwrites it if already held).
    /// Returns `false` when the unit is full; nothing is evicted.
    #[allow(dead_code)]
    pub(crate) fn add(&self, order: StoredOrder) -> bool {
        self.add_with(order, |_| {})
    }

    /// Removes and returns the order, or `None` if it is not held here.
    #[allow(dead_code)]
    pub(crate) fn remove(&self, id: &OrderId) -> Option<StoredOrder> {
        self.remove_with(id, |_| {})
    }

    /// `add`, running `on_commit` while the unit is still locked.
    pub(crate) fn add_with(&self, order: StoredOrder, on_commit: impl Fn(&StoredOrder)) -> bool {
        let mut orders = self.orders.write();
        if !orders.contains_key(&order.order.id) && orders.len() >= self.capacity {
            return false;
        }
        on_commit(&order);
        orders.insert(order.order.id.clone(), order);
        true
    }

    /// `remove`, running `on_commit` while the unit is still locked.
    pub(crate) fn remove_with(
        &self,
        id: &OrderId,
        on_commit: impl Fn(&StoredOrder),
    ) -> Option<StoredOrder> {
        let mut orders = self.orders.write();
        let removed = orders.remove(id)?;
        on_commit(&removed);
        Some(removed)
    }

    /// Exclusive access to the held orders, for multi-unit transitions.
    pub(crate) fn lock(&self) -> RwLockWriteGuard<'_, UnitOrders> {
        self.orders.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, Temperature};
    use std::time::Duration;

    fn stored(id: &str) -> StoredOrder {
        StoredOrder::new(Order::new(id, "Taco", Temperature::Room, Duration::from_secs(10)))
    }

    #[test]
    fn add_respects_capacity() {
        let unit = StorageUnit::new("Shelf-1", 2);
        assert!(unit.add(stored("a")));
        assert!(!unit.is_full());
        assert!(unit.add(stored("b")));
        assert!(unit.is_full());
        assert!(!unit.add(stored("c")));
        assert_eq!(unit.len(), 2);
        assert!(!unit.contains(&OrderId::from("c")));
    }

    #[test]
    fn readding_a_held_order_overwrites_in_place() {
        let unit = StorageUnit::new("Heater-1", 1);
        assert!(unit.add(stored("a")));

        let mut replacement = stored("a");
        replacement.order.freshness = Duration::from_secs(3);
        assert!(unit.add(replacement));

        assert_eq!(unit.len(), 1);
        let held = unit.get(&OrderId::from("a")).unwrap();
        assert_eq!(held.order.freshness, Duration::from_secs(3));
    }

    #[test]
    fn remove_reports_missing_orders() {
        let unit = StorageUnit::new("Cooler-1", 1);
        unit.add(stored("a"));
        assert!(unit.remove(&OrderId::from("a")).is_some());
        assert!(unit.remove(&OrderId::from("a")).is_none());
        assert!(unit.is_empty());
    }

    #[test]
    fn zero_capacity_unit_is_always_full() {
        let unit = StorageUnit::new("Shelf-1", 0);
        assert!(unit.is_full());
        assert!(!unit.add(stored("a")));
    }

    #[test]
    fn list_is_a_snapshot() {
        let unit = StorageUnit::new("Shelf-1", 3);
        unit.add(stored("a"));
        let snapshot = unit.list();
        unit.add(stored("b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(unit.list().len(), 2);
    }
}
