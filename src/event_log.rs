//! Event log for simulation runs
//!
//! Append-only audit trail of everything that happened to the depot:
//! - Event: envelope with id + timestamp + kind
//! - EventKind: simulation-level and depot-level variants
//! - EventLog: thread-safe, append-only log with counting helpers

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single event in the simulation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Monotonic sequence ID (for ordering)
    pub id: u64,
    /// Time since simulation start (ms)
    pub timestamp_ms: u64,
    /// Event type and data
    pub kind: EventKind,
}

/// All possible event types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    // ═══════════════════════════════════════════
    // SIMULATION LEVEL
    // ═══════════════════════════════════════════
    SimulationStarted {
        producer_pause_ms: u64,
        consumer_pause_ms: u64,
    },
    SimulationCompleted {
        final_stock: u64,
        total_duration_ms: u64,
    },

    // ═══════════════════════════════════════════
    // DEPOT LEVEL
    // ═══════════════════════════════════════════
    /// Units added; `stock` is the total right after the deposit
    UnitsDeposited {
        qty: u64,
        stock: u64,
    },
    /// Units removed; `stock` is the total right after the withdrawal
    UnitsWithdrawn {
        qty: u64,
        stock: u64,
    },
    /// Withdrawal attempt refused for insufficient stock (no mutation)
    WithdrawalRefused {
        requested: u64,
        stock: u64,
    },

    // ═══════════════════════════════════════════
    // TASK LEVEL
    // ═══════════════════════════════════════════
    ProducerFinished {
        produced: u64,
        stock: u64,
    },
    ConsumerFinished {
        consumed: u64,
        stock: u64,
    },
}

impl EventKind {
    /// Check if this is a simulation-level event
    pub fn is_simulation_event(&self) -> bool {
        matches!(
            self,
            Self::SimulationStarted { .. } | Self::SimulationCompleted { .. }
        )
    }

    /// Check if this event mutated the depot
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::UnitsDeposited { .. } | Self::UnitsWithdrawn { .. }
        )
    }
}

/// Thread-safe, append-only event log
#[derive(Clone)]
pub struct EventLog {
    events: Arc<RwLock<Vec<Event>>>,
    start_time: Instant,
    next_id: Arc<AtomicU64>,
}

impl EventLog {
    /// Create a new event log (call at simulation start)
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            start_time: Instant::now(),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Emit an event (thread-safe, returns event ID)
    pub fn emit(&self, kind: EventKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let event = Event {
            id,
            timestamp_ms: self.start_time.elapsed().as_millis() as u64,
            kind,
        };

        self.events.write().push(event); // parking_lot: no unwrap needed
        id
    }

    /// Get all events (cloned)
    pub fn events(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    /// Number of successful deposits recorded
    pub fn deposit_count(&self) -> usize {
        self.count(|k| matches!(k, EventKind::UnitsDeposited { .. }))
    }

    /// Number of successful withdrawals recorded
    pub fn withdrawal_count(&self) -> usize {
        self.count(|k| matches!(k, EventKind::UnitsWithdrawn { .. }))
    }

    /// Number of refused withdrawal attempts recorded
    pub fn refusal_count(&self) -> usize {
        self.count(|k| matches!(k, EventKind::WithdrawalRefused { .. }))
    }

    fn count(&self, pred: impl Fn(&EventKind) -> bool) -> usize {
        self.events.read().iter().filter(|e| pred(&e.kind)).count()
    }

    /// Serialize to JSON for persistence/debugging
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self.events()).unwrap_or(Value::Null)
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog").field("len", &self.len()).finish()
    }
}
