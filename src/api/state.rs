//! Application state for the off-day ledger engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::store::Ledger;

/// Shared application state.
///
/// Contains the ledger behind a mutex so that every handler sees a
/// consistent view while mutating.
#[derive(Clone)]
pub struct AppState {
    /// The shared ledger.
    ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Creates a new application state wrapping the given ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Locks and returns the ledger.
    ///
    /// A poisoned lock is recovered rather than propagated; the engine
    /// never leaves partial state behind on failure, so the data inside
    /// is still coherent.
    pub fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
