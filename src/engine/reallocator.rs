//! Background reallocation loop.

use crate::engine::FulfillmentEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Periodically relieves a full shelf by moving hot and cold orders into
/// freed heater and cooler space.
///
/// Created together with its [`StopSignal`]; the loop ends between ticks once
/// the signal is raised or dropped.
pub struct Reallocator {
    engine: Arc<FulfillmentEngine>,
    period: Duration,
    stop: watch::Receiver<bool>,
}

/// Owner-side handle that stops a running [`Reallocator`].
#[derive(Debug)]
pub struct StopSignal {
    sender: watch::Sender<bool>,
}

impl StopSignal {
    pub fn stop(&self) {
        self.sender.send_replace(true);
    }
}

impl Reallocator {
    pub fn new(engine: Arc<FulfillmentEngine>, period: Duration) -> (Self, StopSignal) {
        let (sender, stop) = watch::channel(false);
        let reallocator = Self {
            engine,
            period,
            stop,
        };
        (reallocator, StopSignal { sender })
    }

    /// Runs one reallocation pass per period until stopped.
    pub async fn run(mut self) {
        let period_ms = u64::try_from(self.period.as_millis()).unwrap_or(u64::MAX);
        info!(period_ms, "Reallocator started");
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; start one full period later.
        ticker.tick().await;

        let mut passes: u64 = 0;
        let mut moved_total: usize = 0;
        loop {
            tokio::select! {
                changed = self.stop.changed() => {
                    if changed.is_err() || *self.stop.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    passes += 1;
                    let moved = self.engine.reallocate_once();
                    moved_total += moved;
                    debug!(pass = passes, moved, "Reallocation pass");
                }
            }
        }
        info!(passes, moved = moved_total, "Reallocator stopped");
    }
}
