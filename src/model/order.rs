//! Orders as they enter the facility and as they sit in storage.

use crate::freshness;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Temperature class of an order, and of the storage group that suits it.
///
/// The shelf is the `Room` class: ideal for room-temperature orders and
/// overflow for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Cold,
    Room,
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Temperature::Hot => "hot",
            Temperature::Cold => "cold",
            Temperature::Room => "room",
        };
        f.write_str(name)
    }
}

/// A food order.
///
/// `freshness` is the nominal freshness used for decay in the order's current
/// location. It is rewritten when the order moves from the shelf into ideal
/// storage; `initial_freshness` never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub temperature: Temperature,
    pub freshness: Duration,
    pub initial_freshness: Duration,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique order identifier
    /// * `name` - Food name
    /// * `temperature` - Ideal storage temperature
    /// * `freshness` - How long the order stays fresh under ideal storage
    pub fn new(
        id: impl Into<OrderId>,
        name: impl Into<String>,
        temperature: Temperature,
        freshness: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            temperature,
            freshness,
            initial_freshness: freshness,
        }
    }

    /// Whether storage of the given class keeps this order in ideal conditions.
    pub fn is_ideal_in(&self, storage: Temperature) -> bool {
        self.temperature == storage
    }
}

/// JSON form of an order as handed to the facility (freshness in seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub name: String,
    pub temp: Temperature,
    pub freshness: u64,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order::new(
            record.id,
            record.name,
            record.temp,
            Duration::from_secs(record.freshness),
        )
    }
}

/// An order together with the instant it entered its current storage unit.
#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub order: Order,
    pub placed_at: Instant,
}

impl StoredOrder {
    /// Wraps an order that is being placed right now.
    pub fn new(order: Order) -> Self {
        Self {
            order,
            placed_at: Instant::now(),
        }
    }

    /// Remaining freshness of this order while kept in storage of class `storage`.
    pub fn remaining_freshness(&self, storage: Temperature) -> TimeDelta {
        freshness::remaining(
            self.order.freshness,
            self.placed_at.elapsed(),
            self.order.is_ideal_in(storage),
        )
    }
}
