//! In-memory record stores for the ledger engine.
//!
//! Each record type gets its own id-indexed store with a monotonic id
//! sequence, replacing the row-position identity of the original
//! spreadsheet. Sequences never reuse a number after deletion. The
//! [`Ledger`] bundles both stores, the audit log, and the personnel
//! registry; the engine is the sole mutator.

mod audit_log;
mod grant_store;
mod usage_store;

pub use audit_log::AuditLog;
pub use grant_store::GrantStore;
pub use usage_store::UsageStore;

use crate::config::Roster;

/// Sentinel owner name used when personnel is left unset.
pub const DEFAULT_PERSONNEL: &str = "Default";

/// Normalizes a personnel name: trims, falls back to the sentinel when blank.
pub fn normalize_personnel(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        DEFAULT_PERSONNEL.to_string()
    } else {
        text.to_string()
    }
}

/// The shared mutable state of the tracker: grants, usages, audit log, and
/// the personnel registry.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Granted off-day credits.
    pub grants: GrantStore,
    /// Recorded usage events.
    pub usages: UsageStore,
    /// Append-only mutation log.
    pub audit: AuditLog,
    personnel: Vec<String>,
}

impl Ledger {
    /// Creates an empty ledger with the given personnel roster.
    ///
    /// An empty roster falls back to the sentinel name so at least one
    /// personnel always exists.
    pub fn new(roster: Vec<String>) -> Self {
        let mut personnel: Vec<String> = roster
            .iter()
            .map(|name| normalize_personnel(name))
            .filter(|name| !name.is_empty())
            .collect();
        personnel.dedup();
        if personnel.is_empty() {
            personnel.push(DEFAULT_PERSONNEL.to_string());
        }
        Ledger {
            grants: GrantStore::default(),
            usages: UsageStore::default(),
            audit: AuditLog::default(),
            personnel,
        }
    }

    /// Creates an empty ledger from a loaded roster configuration.
    pub fn from_roster(roster: &Roster) -> Self {
        Self::new(roster.names().to_vec())
    }

    /// The registered personnel names, in roster order.
    pub fn personnel_names(&self) -> &[String] {
        &self.personnel
    }

    /// Looks up a registered name case-insensitively, returning the
    /// registered spelling.
    pub fn find_personnel(&self, name: &str) -> Option<&str> {
        let wanted = normalize_personnel(name);
        self.personnel
            .iter()
            .find(|n| n.eq_ignore_ascii_case(&wanted))
            .map(|n| n.as_str())
    }

    /// Appends a name to the registry. The caller has already checked for
    /// duplicates.
    pub(crate) fn push_personnel(&mut self, name: String) {
        self.personnel.push(name);
    }

    /// Removes a name from the registry.
    pub(crate) fn remove_personnel(&mut self, name: &str) {
        self.personnel.retain(|n| n != name);
    }
}
