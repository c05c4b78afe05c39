//! Depot - producer/consumer simulation over a shared stock

pub mod consumer;
pub mod depot;
pub mod error;
pub mod event_log;
pub mod producer;
pub mod runner;

pub use consumer::{Consumer, CONSUMPTION_TARGET, RETRY_BACKOFF};
pub use depot::Depot;
pub use error::DepotError;
pub use event_log::{Event, EventKind, EventLog};
pub use producer::{Producer, PRODUCTION_RUNS};
pub use runner::{SimulationConfig, SimulationReport, SimulationRunner};
