//! Append-only, timestamp-ordered record of everything done to orders.

use crate::model::{Action, ActionKind, OrderId};
use chrono::Utc;
use parking_lot::Mutex;
use tracing::info;

/// The system's externally observable history.
///
/// Insertion order is the timeline. Timestamps are taken under the log's lock
/// and never step backwards, so the log is also sorted by timestamp.
#[derive(Debug, Default)]
pub struct ActionLog {
    entries: Mutex<Vec<Action>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action stamped with the current time.
    pub fn record(&self, id: &OrderId, kind: ActionKind) -> Action {
        let mut entries = self.entries.lock();
        let now = Utc::now();
        let timestamp = match entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };
        let action = Action {
            timestamp,
            id: id.clone(),
            action: kind,
        };
        entries.push(action.clone());
        info!(action = %kind, order_id = %id, timestamp = action.timestamp_micros(), "Action");
        action
    }

    /// Copy of every action recorded so far, in order.
    pub fn snapshot(&self) -> Vec<Action> {
        self.entries.lock().clone()
    }

    /// Actions recorded for one order, in order.
    pub fn for_order(&self, id: &OrderId) -> Vec<Action> {
        self.entries
            .lock()
            .iter()
            .filter(|action| &action.id == id)
            .cloned()
            .collect()
    }

    pub fn count(&self, kind: ActionKind) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|action| action.action == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
