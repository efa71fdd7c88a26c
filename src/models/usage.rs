//! Usage record model and related types.
//!
//! A usage is one event consuming off-day credit, possibly split across
//! multiple grants. The split is kept as a structured allocation list; the
//! `"G-0001 (0.5) + G-0002 (0.5)"` string the original tracker stored is
//! formatted only at the display/audit boundary.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::duration::{format_duration, FULL_DAY, HALF_DAY};

/// The granularity of a usage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    /// A full day off (1.0).
    FullDay,
    /// The morning half (0.5).
    Am,
    /// The afternoon half (0.5).
    Pm,
}

impl Session {
    /// Parses the form-level FULL/AM/PM token, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "FULL" | "FULL DAY" => Some(Session::FullDay),
            "AM" => Some(Session::Am),
            "PM" => Some(Session::Pm),
            _ => None,
        }
    }

    /// The duration this session requires.
    pub fn required_duration(self) -> Decimal {
        match self {
            Session::FullDay => FULL_DAY,
            Session::Am | Session::Pm => HALF_DAY,
        }
    }

    /// The display label ("Full Day" / "AM" / "PM").
    pub fn label(self) -> &'static str {
        match self {
            Session::FullDay => "Full Day",
            Session::Am => "AM",
            Session::Pm => "PM",
        }
    }
}

/// How much of a usage event was drawn from one specific grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// The grant the amount was drawn from.
    pub grant_id: String,
    /// The amount drawn, always positive.
    pub amount: Decimal,
}

/// Formats an allocation list for display and audit text.
///
/// Produces `"G-0001 (0.5) + G-0002 (0.5)"`; an empty list formats to an
/// empty string.
pub fn format_allocations(allocations: &[Allocation]) -> String {
    allocations
        .iter()
        .map(|a| format!("{} ({})", a.grant_id, format_duration(a.amount)))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// One recorded usage event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Stable identifier, format `U-XXXX`, immutable.
    pub use_id: String,
    /// Owner; matches the personnel of every grant allocated from.
    pub personnel: String,
    /// Calendar date the off-time is intended to be taken.
    pub intended_date: NaiveDate,
    /// Full day, AM, or PM.
    pub session: Session,
    /// Total amount consumed; equals the sum of allocation amounts.
    pub duration: Decimal,
    /// Ordered list of (grant, amount) draws backing this usage.
    pub allocations: Vec<Allocation>,
    /// Optional free-text comments.
    pub comments: String,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

impl UsageRecord {
    /// The display string naming every backing grant and amount.
    pub fn allocations_display(&self) -> String {
        format_allocations(&self.allocations)
    }

    /// Serializes the record for an audit before/after snapshot.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "useId": self.use_id,
            "dateIntended": self.intended_date.format("%Y-%m-%d").to_string(),
            "session": self.session.label(),
            "durationUsed": format_duration(self.duration),
            "offIdsUsed": self.allocations_display(),
            "comments": self.comments,
            "createdAt": self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "personnel": self.personnel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_session_parse() {
        assert_eq!(Session::parse("FULL"), Some(Session::FullDay));
        assert_eq!(Session::parse("Full Day"), Some(Session::FullDay));
        assert_eq!(Session::parse("am"), Some(Session::Am));
        assert_eq!(Session::parse("PM "), Some(Session::Pm));
        assert_eq!(Session::parse("EVENING"), None);
    }

    #[test]
    fn test_session_required_duration() {
        assert_eq!(Session::FullDay.required_duration(), dec("1"));
        assert_eq!(Session::Am.required_duration(), dec("0.5"));
        assert_eq!(Session::Pm.required_duration(), dec("0.5"));
    }

    #[test]
    fn test_format_allocations_joins_with_plus() {
        let allocations = vec![
            Allocation {
                grant_id: "G-0001".to_string(),
                amount: dec("0.5"),
            },
            Allocation {
                grant_id: "G-0002".to_string(),
                amount: dec("0.5"),
            },
        ];
        assert_eq!(
            format_allocations(&allocations),
            "G-0001 (0.5) + G-0002 (0.5)"
        );
    }

    #[test]
    fn test_format_allocations_empty() {
        assert_eq!(format_allocations(&[]), "");
    }

    #[test]
    fn test_snapshot_includes_display_string() {
        let usage = UsageRecord {
            use_id: "U-0001".to_string(),
            personnel: "Alice".to_string(),
            intended_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            session: Session::FullDay,
            duration: dec("1"),
            allocations: vec![Allocation {
                grant_id: "G-0001".to_string(),
                amount: dec("1"),
            }],
            comments: String::new(),
            created_at: Utc::now(),
        };
        let snapshot = usage.snapshot();
        assert_eq!(snapshot["offIdsUsed"], "G-0001 (1)");
        assert_eq!(snapshot["session"], "Full Day");
        assert_eq!(snapshot["durationUsed"], "1");
    }
}
