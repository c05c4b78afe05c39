//! Shared depot guarded by a single exclusive lock.
//!
//! One mutex serializes every operation: deposits, withdrawal attempts,
//! and reads never interleave. The stock is unsigned, so the
//! never-negative invariant is structural; `try_withdraw` is the only
//! decrement path and refuses when the stock is insufficient.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::event_log::{EventKind, EventLog};

/// Shared stock of units, cloneable handle
#[derive(Clone)]
pub struct Depot {
    stock: Arc<Mutex<u64>>,
    event_log: EventLog,
}

impl Depot {
    /// Create an empty depot wired to the given event log
    pub fn new(event_log: EventLog) -> Self {
        Self {
            stock: Arc::new(Mutex::new(0)),
            event_log,
        }
    }

    /// Add `qty` units unconditionally. Returns the new stock.
    ///
    /// No capacity ceiling is enforced.
    pub fn deposit(&self, qty: u64) -> u64 {
        let stock = {
            let mut guard = self.stock.lock();
            *guard += qty;
            *guard
        };
        info!(qty, stock, "deposited units");
        self.event_log.emit(EventKind::UnitsDeposited { qty, stock });
        stock
    }

    /// Remove `qty` units if available.
    ///
    /// Returns `true` on success. Insufficient stock returns `false`
    /// without mutating; that is an ordinary precondition-not-met
    /// outcome, not an error.
    pub fn try_withdraw(&self, qty: u64) -> bool {
        let outcome = {
            let mut guard = self.stock.lock();
            if *guard >= qty {
                *guard -= qty;
                Ok(*guard)
            } else {
                Err(*guard)
            }
        };
        match outcome {
            Ok(stock) => {
                info!(qty, stock, "withdrew units");
                self.event_log.emit(EventKind::UnitsWithdrawn { qty, stock });
                true
            }
            Err(stock) => {
                debug!(requested = qty, stock, "withdrawal refused");
                self.event_log.emit(EventKind::WithdrawalRefused {
                    requested: qty,
                    stock,
                });
                false
            }
        }
    }

    /// Consistent read of the current stock
    pub fn stock(&self) -> u64 {
        *self.stock.lock()
    }
}

impl std::fmt::Debug for Depot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Depot").field("stock", &self.stock()).finish()
    }
}
