//! Entries of the action log.

use crate::model::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What happened to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Place,
    Move,
    Pickup,
    Discard,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Place => "place",
            ActionKind::Move => "move",
            ActionKind::Pickup => "pickup",
            ActionKind::Discard => "discard",
        };
        f.pad(name)
    }
}

/// A single recorded event. Serializes as
/// `{"timestamp": <unix micros>, "id": "...", "action": "place"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(with = "chrono::serde::ts_microseconds")]
    pub timestamp: DateTime<Utc>,
    pub id: OrderId,
    pub action: ActionKind,
}

impl Action {
    /// Timestamp as microseconds since the Unix epoch.
    pub fn timestamp_micros(&self) -> i64 {
        self.timestamp.timestamp_micros()
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<7} order={:<8} at={}",
            self.action,
            self.id,
            self.timestamp_micros()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn action_serializes_with_microsecond_timestamp() {
        let action = Action {
            timestamp: Utc.timestamp_micros(1_700_000_000_123_456).unwrap(),
            id: OrderId::from("o1"),
            action: ActionKind::Discard,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_123_456_i64);
        assert_eq!(json["id"], "o1");
        assert_eq!(json["action"], "discard");
    }

    #[test]
    fn display_lines_up_columns() {
        let action = Action {
            timestamp: Utc.timestamp_micros(1_700_000_000_123_456).unwrap(),
            id: OrderId::from("o1"),
            action: ActionKind::Move,
        };
        assert_eq!(action.to_string(), "move    order=o1       at=1700000000123456");
    }
}
