//! Core data models for the off-day ledger engine.
//!
//! This module contains all the domain records used throughout the engine.

mod audit;
mod grant;
mod usage;

pub use audit::{
    build_change_summary, AuditAction, AuditLogEntry, SNAPSHOT_TEXT_LIMIT, SUMMARY_TEXT_LIMIT,
};
pub(crate) use audit::{safe_json, truncate_log_text, GRANT_FIELD_LABELS, USAGE_FIELD_LABELS};
pub use grant::{compute_status, DurationType, GrantRecord, GrantStatus, ReasonType};
pub use usage::{format_allocations, Allocation, Session, UsageRecord};
