//! Simulation coordinator
//!
//! Wires one depot to one producer and one consumer, runs both to
//! completion, and reports the final stock.

use std::time::{Duration, Instant};

use tracing::info;

use crate::consumer::Consumer;
use crate::depot::Depot;
use crate::error::DepotError;
use crate::event_log::{EventKind, EventLog};
use crate::producer::Producer;

/// Default pause between productions (20 ms)
pub const DEFAULT_PRODUCER_PAUSE: Duration = Duration::from_millis(20);
/// Default pause after a successful consumption (50 ms)
pub const DEFAULT_CONSUMER_PAUSE: Duration = Duration::from_millis(50);

/// Inter-cycle pauses for the two tasks
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub producer_pause: Duration,
    pub consumer_pause: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            producer_pause: DEFAULT_PRODUCER_PAUSE,
            consumer_pause: DEFAULT_CONSUMER_PAUSE,
        }
    }
}

/// Outcome of a completed simulation
#[derive(Debug)]
pub struct SimulationReport {
    pub produced: u64,
    pub consumed: u64,
    pub final_stock: u64,
    pub duration: Duration,
    pub event_log: EventLog,
}

/// Owns the configuration and drives one simulation to completion
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run producer and consumer concurrently and join both.
    ///
    /// The join is unconditional (no timeout); the only error path is a
    /// panicked task surfacing as [`DepotError::TaskJoin`].
    pub async fn run(&self) -> Result<SimulationReport, DepotError> {
        let start = Instant::now();
        let event_log = EventLog::new();
        let depot = Depot::new(event_log.clone());

        event_log.emit(EventKind::SimulationStarted {
            producer_pause_ms: self.config.producer_pause.as_millis() as u64,
            consumer_pause_ms: self.config.consumer_pause.as_millis() as u64,
        });
        info!(
            producer_pause_ms = self.config.producer_pause.as_millis() as u64,
            consumer_pause_ms = self.config.consumer_pause.as_millis() as u64,
            "starting producer and consumer"
        );

        let producer = Producer::new(depot.clone(), event_log.clone(), self.config.producer_pause);
        let consumer = Consumer::new(depot.clone(), event_log.clone(), self.config.consumer_pause);

        let producer_handle = tokio::spawn(async move { producer.run().await });
        let consumer_handle = tokio::spawn(async move { consumer.run().await });

        let produced = producer_handle.await?;
        let consumed = consumer_handle.await?;

        let final_stock = depot.stock();
        let duration = start.elapsed();
        event_log.emit(EventKind::SimulationCompleted {
            final_stock,
            total_duration_ms: duration.as_millis() as u64,
        });
        info!(final_stock, "simulation finished");

        Ok(SimulationReport {
            produced,
            consumed,
            final_stock,
            duration,
            event_log,
        })
    }
}

impl Default for SimulationRunner {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
