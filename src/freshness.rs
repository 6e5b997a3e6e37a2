//! # Freshness Model
//!
//! Pure functions over elapsed time. An order kept in ideal storage loses
//! freshness at the normal rate; a hot or cold order on the shelf loses it at
//! twice that rate, which is expressed as halving its nominal budget:
//!
//! ```text
//! ideal:     remaining = nominal     - elapsed
//! non-ideal: remaining = nominal / 2 - elapsed
//! ```
//!
//! Remaining freshness is signed: an expired order has a negative value, which
//! keeps it comparable when picking the least fresh order to discard.

use chrono::TimeDelta;
use std::time::Duration;

/// Remaining freshness after `elapsed` in the current location.
pub fn remaining(nominal: Duration, elapsed: Duration, ideal: bool) -> TimeDelta {
    let budget = if ideal { nominal } else { nominal / 2 };
    to_delta(budget) - to_delta(elapsed)
}

/// Nominal freshness an order carries into ideal storage after `elapsed` on
/// the shelf, or `None` when the double-rate decay has already used it up.
///
/// The shelf consumed `2 * elapsed` of the initial budget; that consumption
/// stays spent once the order is back at the normal rate.
pub fn after_move(initial: Duration, elapsed: Duration) -> Option<Duration> {
    initial
        .checked_sub(elapsed.saturating_mul(2))
        .filter(|left| !left.is_zero())
}

fn to_delta(duration: Duration) -> TimeDelta {
    TimeDelta::nanoseconds(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX))
}
