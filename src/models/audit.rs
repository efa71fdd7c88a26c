//! Audit log entry model and summary helpers.
//!
//! Every edit, delete, and undo appends one immutable entry with before and
//! after snapshots of the affected record. Creation of grants and usages is
//! deliberately not logged; the ledger rows themselves are the creation
//! record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum length of a serialized before/after snapshot in an entry.
pub const SNAPSHOT_TEXT_LIMIT: usize = 45_000;

/// Maximum length of a change summary line.
pub const SUMMARY_TEXT_LIMIT: usize = 1_200;

/// The kind of mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// A grant record was edited.
    EditGranted,
    /// One or more grant records were deleted.
    DeleteGranted,
    /// A usage record was edited.
    EditUsed,
    /// A usage record was undone and removed.
    UndoUsed,
}

impl AuditAction {
    /// The log label ("EDIT_GRANTED", "DELETE_GRANTED", ...).
    pub fn label(self) -> &'static str {
        match self {
            AuditAction::EditGranted => "EDIT_GRANTED",
            AuditAction::DeleteGranted => "DELETE_GRANTED",
            AuditAction::EditUsed => "EDIT_USED",
            AuditAction::UndoUsed => "UNDO_USED",
        }
    }
}

/// One append-only audit log entry, immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Stable identifier, format `L-XXXXX`.
    pub log_id: String,
    /// When the mutation happened.
    pub timestamp: DateTime<Utc>,
    /// What kind of mutation this records.
    pub action: AuditAction,
    /// The personnel whose records were touched.
    pub personnel: String,
    /// "Off Granted" or "Off Used".
    pub record_type: String,
    /// The id (or comma-joined ids) of the affected records.
    pub record_id: String,
    /// Human-readable description of the change.
    pub summary: String,
    /// Serialized snapshot of the record before the mutation.
    pub before: String,
    /// Serialized snapshot after, or a deleted-marker.
    pub after: String,
}

/// Serializes a snapshot value, degrading to a debug string on failure.
///
/// Audit logging must never abort the underlying mutation, so a
/// serialization error falls back to best-effort text.
pub(crate) fn safe_json(value: &Value) -> String {
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "audit snapshot serialization failed, using fallback");
            format!("{:?}", value)
        }
    }
}

/// Truncates audit text to the given limit, marking the cut with "...".
pub(crate) fn truncate_log_text(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut cut = limit.saturating_sub(3);
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}

fn summary_value(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    };
    if text.is_empty() { "-".to_string() } else { text }
}

/// Builds a field-level diff summary between two snapshots.
///
/// Only changed fields are listed, as `"Label: old -> new"` joined by
/// `" | "`, with `"-"` standing in for blanks. Fields are compared in the
/// order given by `field_labels`.
pub fn build_change_summary(before: &Value, after: &Value, field_labels: &[(&str, &str)]) -> String {
    let mut parts = Vec::new();

    for (key, label) in field_labels {
        let before_text = summary_value(before.get(key));
        let after_text = summary_value(after.get(key));
        if before_text == after_text {
            continue;
        }
        parts.push(format!("{}: {} -> {}", label, before_text, after_text));
    }

    if parts.is_empty() {
        return "No field changes detected.".to_string();
    }
    truncate_log_text(&parts.join(" | "), SUMMARY_TEXT_LIMIT)
}

/// Field labels for grant edit summaries.
pub(crate) const GRANT_FIELD_LABELS: &[(&str, &str)] = &[
    ("dateOffGranted", "Date Off Granted"),
    ("durationType", "Duration Type"),
    ("durationValue", "Duration Value"),
    ("reasonType", "Reason Type"),
    ("weekendOpsDutyDate", "Weekend Ops Duty Date"),
    ("reasonDetails", "Reason Details"),
    ("providedBy", "Provided By"),
    ("usedValue", "Used Value"),
    ("remainingValue", "Remaining Value"),
    ("status", "Status"),
];

/// Field labels for usage edit summaries.
pub(crate) const USAGE_FIELD_LABELS: &[(&str, &str)] = &[
    ("dateIntended", "Date Intended"),
    ("session", "Session"),
    ("durationUsed", "Duration Used"),
    ("offIdsUsed", "Off IDs Used"),
    ("comments", "Comments"),
];
