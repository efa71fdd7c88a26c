//! Roster configuration for the off-day ledger engine.
//!
//! This module loads the personnel roster from a YAML file. The roster is
//! the only configuration the engine consumes; it seeds the personnel
//! registry when a ledger is created.

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::Roster;
