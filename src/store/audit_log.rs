//! Append-only audit log sink.

use chrono::Utc;
use serde_json::Value;

use crate::models::{
    safe_json, truncate_log_text, AuditAction, AuditLogEntry, SNAPSHOT_TEXT_LIMIT,
};

/// The append-only record of every edit, delete, and undo.
///
/// Entries are never mutated or removed. Snapshot serialization failure
/// degrades to a textual fallback rather than aborting the mutation being
/// logged.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
    next_seq: u64,
}

impl AuditLog {
    /// Appends one entry and returns its log id (`L-XXXXX`).
    pub fn append(
        &mut self,
        action: AuditAction,
        personnel: &str,
        record_type: &str,
        record_id: &str,
        summary: &str,
        before: &Value,
        after: &Value,
    ) -> String {
        self.next_seq += 1;
        let log_id = format!("L-{:05}", self.next_seq);

        self.entries.push(AuditLogEntry {
            log_id: log_id.clone(),
            timestamp: Utc::now(),
            action,
            personnel: personnel.to_string(),
            record_type: record_type.to_string(),
            record_id: record_id.to_string(),
            summary: summary.to_string(),
            before: truncate_log_text(&safe_json(before), SNAPSHOT_TEXT_LIMIT),
            after: truncate_log_text(&safe_json(after), SNAPSHOT_TEXT_LIMIT),
        });

        log_id
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    /// The entries touching one personnel, oldest first.
    pub fn for_personnel<'a>(
        &'a self,
        personnel: &'a str,
    ) -> impl Iterator<Item = &'a AuditLogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.personnel == personnel)
    }

    /// Number of logged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes entries for a personnel during a cascade delete, returning
    /// how many were removed.
    pub(crate) fn remove_for_personnel(&mut self, personnel: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.personnel != personnel);
        before - self.entries.len()
    }
}
