//! Consumer task: drains the depot with a fixed retry backoff.

use std::time::Duration;

use tracing::info;

use crate::depot::Depot;
use crate::event_log::{EventKind, EventLog};

/// Fixed number of successful withdrawals per run
pub const CONSUMPTION_TARGET: u64 = 20;

/// Backoff before retrying a refused withdrawal. Deliberately not
/// configurable, unlike the two inter-cycle pauses.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Withdraws one unit per cycle until the target is reached,
/// pausing after each success and backing off after each refusal
pub struct Consumer {
    depot: Depot,
    event_log: EventLog,
    pause: Duration,
}

impl Consumer {
    pub fn new(depot: Depot, event_log: EventLog, pause: Duration) -> Self {
        Self {
            depot,
            event_log,
            pause,
        }
    }

    /// Run until the consumption target is reached. Returns total consumed.
    ///
    /// Refused withdrawals do not count toward the target; they only
    /// delay the next attempt by [`RETRY_BACKOFF`].
    pub async fn run(&self) -> u64 {
        let mut consumed = 0;
        while consumed < CONSUMPTION_TARGET {
            if self.depot.try_withdraw(1) {
                consumed += 1;
                tokio::time::sleep(self.pause).await;
            } else {
                info!(
                    backoff_ms = RETRY_BACKOFF.as_millis() as u64,
                    "no units available; waiting before retrying"
                );
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
        }

        let stock = self.depot.stock();
        info!(consumed, stock, "consumption finished");
        self.event_log.emit(EventKind::ConsumerFinished { consumed, stock });
        consumed
    }
}
