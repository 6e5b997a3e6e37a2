//! # Fulfillment Engine
//!
//! Placement, pickup, moves between groups, discard-on-overflow and the
//! reallocation pass, all over one set of storage groups and one action log.
//!
//! ## Lock hierarchy
//!
//! Locks are always taken in this order and never the other way round:
//!
//! 1. engine: `placement` (serializes [`FulfillmentEngine::place_order`]) or
//!    `pickup` (serializes [`FulfillmentEngine::pickup_order`]); the two are
//!    independent of each other
//! 2. group membership lock
//! 3. unit lock, source unit before destination unit during a move
//! 4. action log lock
//!
//! Actions are recorded while the unit that changed is still locked, so the
//! log order matches the order in which storage actually changed.

use crate::config::FulfillmentConfig;
use crate::engine::ActionLog;
use crate::freshness;
use crate::model::{ActionKind, Order, OrderId, StoredOrder, Temperature};
use crate::storage::{StorageGroup, StorageUnit};
use parking_lot::Mutex;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Result of one attempt to move an order out of a shelf unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    /// The order now sits in the destination group.
    Moved,
    /// The order is not in the source unit (picked up, discarded or moved).
    Absent,
    /// Its freshness ran out on the shelf; it stays where it is.
    Expired,
    /// No destination unit had room; it stays where it is.
    NoRoom,
}

/// Owns all storage state and the action log.
#[derive(Debug)]
pub struct FulfillmentEngine {
    cooler: StorageGroup,
    heater: StorageGroup,
    shelf: StorageGroup,
    actions: ActionLog,
    placement: Mutex<()>,
    pickup: Mutex<()>,
}

impl FulfillmentEngine {
    /// Builds the three storage groups described by `config`.
    pub fn new(config: &FulfillmentConfig) -> Self {
        let engine = Self {
            cooler: StorageGroup::with_units(
                Temperature::Cold,
                "Cooler",
                config.num_coolers,
                config.cooler_cap,
            ),
            heater: StorageGroup::with_units(
                Temperature::Hot,
                "Heater",
                config.num_heaters,
                config.heater_cap,
            ),
            shelf: StorageGroup::with_units(
                Temperature::Room,
                "Shelf",
                config.num_shelves,
                config.shelf_cap,
            ),
            actions: ActionLog::new(),
            placement: Mutex::new(()),
            pickup: Mutex::new(()),
        };
        for group in engine.groups() {
            for unit in group.units() {
                info!(unit = unit.name(), capacity = unit.capacity(), "Created storage");
            }
        }
        engine
    }

    pub fn cooler(&self) -> &StorageGroup {
        &self.cooler
    }

    pub fn heater(&self) -> &StorageGroup {
        &self.heater
    }

    pub fn shelf(&self) -> &StorageGroup {
        &self.shelf
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    /// Name of the unit currently holding `id`, for diagnostics.
    pub fn locate(&self, id: &OrderId) -> Option<String> {
        self.groups()
            .into_iter()
            .flat_map(StorageGroup::units)
            .find(|unit| unit.contains(id))
            .map(|unit| unit.name().to_string())
    }

    fn groups(&self) -> [&StorageGroup; 3] {
        [&self.heater, &self.cooler, &self.shelf]
    }

    /// The temperature-matched group; room orders have none besides the shelf.
    fn ideal_group(&self, temperature: Temperature) -> Option<&StorageGroup> {
        match temperature {
            Temperature::Hot => Some(&self.heater),
            Temperature::Cold => Some(&self.cooler),
            Temperature::Room => None,
        }
    }

    /// Stores an incoming order, evicting from the shelf if it has to.
    ///
    /// Hot and cold orders go to their ideal group when it has room, then to
    /// the shelf. With the shelf full, a shelf order of the same temperature is
    /// moved to its ideal group to make space, and failing that the least
    /// fresh shelf order is moved or discarded.
    pub fn place_order(&self, order: Order) {
        let _serial = self.placement.lock();
        let id = order.id.clone();
        let temperature = order.temperature;
        debug!(order_id = %id, %temperature, "Placing order");
        let stored = StoredOrder::new(order);

        if let Some(ideal) = self.ideal_group(temperature) {
            if self.store(ideal, &stored) {
                return;
            }
        }
        if self.store(&self.shelf, &stored) {
            return;
        }
        if temperature != Temperature::Room
            && self.shelf.is_full()
            && self.make_room_for(temperature)
            && self.store(&self.shelf, &stored)
        {
            return;
        }

        info!(order_id = %id, "Shelf is full, discarding to make room");
        let freed = !self.shelf.is_full() || self.discard_from_shelf();
        if self.store(&self.shelf, &stored) {
            return;
        }
        debug_assert!(!freed, "freed shelf slot refused order {id}");
        if freed {
            error!(order_id = %id, "Freed shelf slot refused the order, dropping it");
        } else {
            warn!(order_id = %id, "No storage can hold the order, dropping it");
        }
    }

    /// Removes an order for pickup. Missing orders are a no-op.
    ///
    /// Groups are searched heater, cooler, shelf. Orders only ever move from
    /// the shelf into the heater or cooler, so when the first pass misses, the
    /// ideal groups are searched once more in case the order left the shelf
    /// mid-scan.
    pub fn pickup_order(&self, id: &OrderId) {
        let _serial = self.pickup.lock();
        let found = [&self.heater, &self.cooler, &self.shelf, &self.heater, &self.cooler]
            .into_iter()
            .any(|group| {
                group
                    .remove_with(id, |_| {
                        self.actions.record(id, ActionKind::Pickup);
                    })
                    .is_some()
            });
        if !found {
            warn!(order_id = %id, "Order not found during pickup");
        }
    }

    /// One pass of the background reallocation: when the shelf is full, move
    /// shelf orders into any heater or cooler space. Returns how many moved.
    pub fn reallocate_once(&self) -> usize {
        if !self.shelf.is_full() {
            return 0;
        }
        let mut moved = 0;
        for stored in self.shelf.list() {
            let Some(ideal) = self.ideal_group(stored.order.temperature) else {
                continue;
            };
            if !ideal.is_full() && self.move_from_shelf(&stored.order.id, ideal) {
                moved += 1;
            }
        }
        if moved > 0 {
            debug!(moved, "Reallocated shelf orders");
        }
        moved
    }

    /// Moves one shelf order of `temperature` into its ideal group.
    fn make_room_for(&self, temperature: Temperature) -> bool {
        let Some(ideal) = self.ideal_group(temperature) else {
            return false;
        };
        self.shelf
            .list()
            .into_iter()
            .filter(|stored| stored.order.temperature == temperature)
            .any(|stored| self.move_from_shelf(&stored.order.id, ideal))
    }

    /// Frees a shelf slot from the least fresh order: moved to its ideal group
    /// if possible, discarded otherwise. Returns `false` if the shelf is empty.
    fn discard_from_shelf(&self) -> bool {
        let Some(candidate) = self.shelf.least_fresh() else {
            return false;
        };
        let id = &candidate.order.id;
        if let Some(ideal) = self.ideal_group(candidate.order.temperature) {
            if self.move_from_shelf(id, ideal) {
                return true;
            }
        }
        let remaining = candidate.remaining_freshness(Temperature::Room);
        let discarded = self.shelf.remove_with(id, |_| {
            self.actions.record(id, ActionKind::Discard);
        });
        if discarded.is_some() {
            info!(order_id = %id, remaining_ms = remaining.num_milliseconds(), "Discarded");
        }
        // Gone either way: discarded here or taken off the shelf concurrently.
        true
    }

    fn move_from_shelf(&self, id: &OrderId, to: &StorageGroup) -> bool {
        for unit in self.shelf.units() {
            match self.move_order(id, unit, to) {
                MoveOutcome::Absent => continue,
                outcome => return outcome == MoveOutcome::Moved,
            }
        }
        false
    }

    /// Atomically moves `id` from the shelf unit `from` into the first unit of
    /// `to` with room.
    ///
    /// The order's freshness is recomputed for the double-rate time it spent
    /// on the shelf and its placement anchor is reset. On any failure the order
    /// is left untouched in `from`; it is never held by two units at once.
    /// `from` itself is never a destination.
    pub(crate) fn move_order(
        &self,
        id: &OrderId,
        from: &StorageUnit,
        to: &StorageGroup,
    ) -> MoveOutcome {
        let mut source = from.lock();
        let Some(mut moved) = source.get(id).cloned() else {
            return MoveOutcome::Absent;
        };

        if !moved.order.is_ideal_in(Temperature::Room) {
            match freshness::after_move(moved.order.initial_freshness, moved.placed_at.elapsed()) {
                Some(remaining) => {
                    moved.order.freshness = remaining;
                    moved.placed_at = Instant::now();
                }
                None => {
                    debug!(order_id = %id, unit = from.name(), "Expired, not moving");
                    return MoveOutcome::Expired;
                }
            }
        }

        for unit in to.units().iter().filter(|unit| !std::ptr::eq(*unit, from)) {
            let mut destination = unit.lock();
            if destination.len() < unit.capacity() {
                source.remove(id);
                destination.insert(id.clone(), moved);
                self.actions.record(id, ActionKind::Move);
                debug!(order_id = %id, from = from.name(), to = unit.name(), "Moved");
                return MoveOutcome::Moved;
            }
        }
        MoveOutcome::NoRoom
    }

    /// Stores the order in `group`, recording the placement on success.
    fn store(&self, group: &StorageGroup, stored: &StoredOrder) -> bool {
        group.add_with(stored.clone(), |placed| {
            self.actions.record(&placed.order.id, ActionKind::Place);
        })
    }
}
