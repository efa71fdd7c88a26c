//! Grant record model and related types.
//!
//! A grant is one credited off-day allowance: a duration of off-time awarded
//! to a personnel, consumed partially or fully by usage events.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::duration::{format_duration, round1, FULL_DAY, HALF_DAY};

/// The granularity of a granted off-day credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationType {
    /// A full day of credit (1.0).
    FullDay,
    /// A half day of credit (0.5).
    HalfDay,
}

impl DurationType {
    /// Parses the form-level FULL/HALF token, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "FULL" => Some(DurationType::FullDay),
            "HALF" => Some(DurationType::HalfDay),
            _ => None,
        }
    }

    /// The duration value this type represents.
    pub fn value(self) -> Decimal {
        match self {
            DurationType::FullDay => FULL_DAY,
            DurationType::HalfDay => HALF_DAY,
        }
    }

    /// The display label ("Full Day" / "Half Day").
    pub fn label(self) -> &'static str {
        match self {
            DurationType::FullDay => "Full Day",
            DurationType::HalfDay => "Half Day",
        }
    }
}

/// Why the off-day credit was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonType {
    /// Compensation for weekend ops duty.
    Ops,
    /// Any other reason, described in free text.
    Others,
}

impl ReasonType {
    /// Parses the form-level OPS/OTHERS token, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "OPS" => Some(ReasonType::Ops),
            "OTHERS" => Some(ReasonType::Others),
            _ => None,
        }
    }

    /// The display label ("Ops" / "Others").
    pub fn label(self) -> &'static str {
        match self {
            ReasonType::Ops => "Ops",
            ReasonType::Others => "Others",
        }
    }
}

/// Consumption state of a grant, derived from its used/remaining amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantStatus {
    /// Nothing has been allocated away from this grant.
    Unused,
    /// Some but not all of the grant has been consumed.
    Partial,
    /// The grant is fully consumed.
    Used,
}

impl GrantStatus {
    /// The display label ("Unused" / "Partial" / "Used").
    pub fn label(self) -> &'static str {
        match self {
            GrantStatus::Unused => "Unused",
            GrantStatus::Partial => "Partial",
            GrantStatus::Used => "Used",
        }
    }
}

/// Derives a grant's status from its used and remaining amounts.
///
/// Pure function, called after every mutation of used/remaining.
pub fn compute_status(used: Decimal, remaining: Decimal) -> GrantStatus {
    let used = round1(used);
    let remaining = round1(remaining);
    if used <= Decimal::ZERO {
        GrantStatus::Unused
    } else if remaining <= Decimal::ZERO {
        GrantStatus::Used
    } else {
        GrantStatus::Partial
    }
}

/// One granted off-day credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantRecord {
    /// Stable identifier, format `G-XXXX`, immutable after creation.
    pub id: String,
    /// Owner of the credit.
    pub personnel: String,
    /// Calendar date the credit was granted.
    pub granted_date: NaiveDate,
    /// Full-day or half-day credit.
    pub duration_type: DurationType,
    /// The credit amount, fully determined by `duration_type`.
    pub duration_value: Decimal,
    /// Why the credit was granted.
    pub reason_type: ReasonType,
    /// For Ops grants, the Saturday/Sunday duty date being compensated.
    pub weekend_ops_duty_date: Option<NaiveDate>,
    /// Reason text; derived for Ops, free text for Others.
    pub reason_details: String,
    /// Who provided the credit.
    pub provided_by: String,
    /// Cumulative amount allocated away from this grant.
    pub used: Decimal,
    /// Unconsumed portion, always `duration_value - used`.
    pub remaining: Decimal,
    /// Derived consumption state.
    pub status: GrantStatus,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

impl GrantRecord {
    /// The label shown when picking this grant in a usage dialog.
    ///
    /// Ops grants name the weekend duty date; Others grants name the
    /// provider and details, with placeholders when blank.
    pub fn option_label(&self) -> String {
        match self.reason_type {
            ReasonType::Ops => {
                let weekend = self
                    .weekend_ops_duty_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "Unknown date".to_string());
                format!(
                    "{}, {} day, Weekend Ops on ({})",
                    self.id,
                    format_duration(self.remaining),
                    weekend
                )
            }
            ReasonType::Others => {
                let provider = if self.provided_by.is_empty() {
                    "Unknown"
                } else {
                    &self.provided_by
                };
                let details = if self.reason_details.is_empty() {
                    "No details"
                } else {
                    &self.reason_details
                };
                format!(
                    "{}, {} day, Off provided by ({}) For ({})",
                    self.id,
                    format_duration(self.remaining),
                    provider,
                    details
                )
            }
        }
    }

    /// Serializes the record for an audit before/after snapshot.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "dateOffGranted": self.granted_date.format("%Y-%m-%d").to_string(),
            "durationType": self.duration_type.label(),
            "durationValue": format_duration(self.duration_value),
            "reasonType": self.reason_type.label(),
            "weekendOpsDutyDate": self
                .weekend_ops_duty_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            "reasonDetails": self.reason_details,
            "providedBy": self.provided_by,
            "usedValue": format_duration(self.used),
            "remainingValue": format_duration(self.remaining),
            "status": self.status.label(),
            "createdAt": self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "personnel": self.personnel,
        })
    }
}
