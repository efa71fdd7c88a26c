//! The ledger allocation engine.
//!
//! This module contains the mutating operations of the tracker: grant
//! creation/edit/deletion, usage creation/edit/undo, and the read-side
//! listings and aggregates. Every operation validates its full input against
//! current store state before touching anything, so a failure never leaves
//! partial state behind.

mod aggregate;
mod allocation;
mod create_grant;
mod create_usage;
mod delete_grants;
mod edit_grant;
mod edit_usage;
mod list_grants;
mod personnel;
mod undo_usage;

pub use aggregate::{get_aggregates, Aggregates};
pub use create_grant::{create_grant, CreateGrantRequest, GrantCreated};
pub use create_usage::{create_usage, CreateUsageRequest, UsageCreated};
pub use delete_grants::{delete_grants, DeleteGrantsRequest, GrantsDeleted};
pub use edit_grant::{edit_grant, EditGrantRequest, GrantEdited};
pub use edit_usage::{edit_usage, EditUsageRequest, UsageEdited};
pub use list_grants::{list_available_grants, GrantOption};
pub use personnel::{
    add_personnel, delete_personnel, DeletePersonnelRequest, PersonnelChanged,
};
pub use undo_usage::{undo_usage, UsageUndone};

use chrono::{Datelike, NaiveDate, Utc, Weekday};

use crate::error::{LedgerError, LedgerResult};

/// Parses a form-level date input.
///
/// Blank input defaults to today; anything else must be a strict
/// `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date_input(raw: &str, message: &str) -> LedgerResult<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Utc::now().date_naive());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| LedgerError::validation(message))
}

/// Whether a date falls on Saturday or Sunday.
pub(crate) fn is_weekend_date(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Trims and drops empty entries from a caller-supplied id list, removing
/// duplicates while preserving first-occurrence order.
pub(crate) fn clean_id_list(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in raw {
        let id = id.trim();
        if id.is_empty() || out.iter().any(|seen| seen == id) {
            continue;
        }
        out.push(id.to_string());
    }
    out
}
