//! Producer task: fills the depot one unit at a time.

use std::time::Duration;

use tracing::info;

use crate::depot::Depot;
use crate::event_log::{EventKind, EventLog};

/// Fixed number of production cycles per run
pub const PRODUCTION_RUNS: u64 = 100;

/// Deposits one unit per cycle, pausing between cycles
pub struct Producer {
    depot: Depot,
    event_log: EventLog,
    pause: Duration,
}

impl Producer {
    pub fn new(depot: Depot, event_log: EventLog, pause: Duration) -> Self {
        Self {
            depot,
            event_log,
            pause,
        }
    }

    /// Run all production cycles to completion. Returns total produced.
    ///
    /// There is no failure path; the timed pause cannot be interrupted
    /// mid-wait, and an early wake would simply mean the next deposit
    /// happens sooner.
    pub async fn run(&self) -> u64 {
        for _ in 0..PRODUCTION_RUNS {
            self.depot.deposit(1);
            tokio::time::sleep(self.pause).await;
        }

        let stock = self.depot.stock();
        info!(produced = PRODUCTION_RUNS, stock, "production finished");
        self.event_log.emit(EventKind::ProducerFinished {
            produced: PRODUCTION_RUNS,
            stock,
        });
        PRODUCTION_RUNS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn producer_deposits_exactly_the_fixed_runs() {
        let event_log = EventLog::new();
        let depot = Depot::new(event_log.clone());
        let producer = Producer::new(depot.clone(), event_log.clone(), Duration::ZERO);

        let produced = producer.run().await;

        assert_eq!(produced, PRODUCTION_RUNS);
        assert_eq!(depot.stock(), PRODUCTION_RUNS);
        assert_eq!(event_log.deposit_count(), PRODUCTION_RUNS as usize);
    }

    #[tokio::test]
    async fn producer_emits_finished_event() {
        let event_log = EventLog::new();
        let depot = Depot::new(event_log.clone());
        let producer = Producer::new(depot, event_log.clone(), Duration::ZERO);

        producer.run().await;

        let finished: Vec<_> = event_log
            .events()
            .into_iter()
            .filter(|e| matches!(e.kind, EventKind::ProducerFinished { .. }))
            .collect();
        assert_eq!(finished.len(), 1);
        assert_eq!(
            finished[0].kind,
            EventKind::ProducerFinished {
                produced: PRODUCTION_RUNS,
                stock: PRODUCTION_RUNS,
            }
        );
    }
}
