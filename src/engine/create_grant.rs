//! Grant creation.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::duration::format_duration;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DurationType, GrantRecord, GrantStatus, ReasonType};
use crate::store::{normalize_personnel, Ledger};

use super::{is_weekend_date, parse_date_input};

/// Input for creating a granted off-day credit.
#[derive(Debug, Clone, Default)]
pub struct CreateGrantRequest {
    /// Owner of the credit.
    pub personnel: String,
    /// Grant date as `YYYY-MM-DD`; blank defaults to today.
    pub granted_date: String,
    /// FULL or HALF.
    pub duration_type: String,
    /// OPS or OTHERS.
    pub reason_type: String,
    /// For OPS: the Saturday/Sunday duty date as `YYYY-MM-DD`.
    pub weekend_ops_date: String,
    /// For OTHERS: free-text reason details.
    pub other_details: String,
    /// Who provided the credit; defaults to "Yourself" for OPS.
    pub provided_by: String,
}

/// The outcome of a successful grant creation.
#[derive(Debug, Clone)]
pub struct GrantCreated {
    /// The assigned grant id.
    pub id: String,
    /// Human-readable confirmation.
    pub message: String,
}

/// The validated reason-specific fields shared by create and edit.
pub(crate) struct ReasonFields {
    pub reason_type: ReasonType,
    pub weekend_ops_duty_date: Option<NaiveDate>,
    pub reason_details: String,
    pub provided_by: String,
}

/// Validates the OPS/OTHERS reason branch of a grant form.
pub(crate) fn validate_reason(
    reason_type: &str,
    weekend_ops_date: &str,
    other_details: &str,
    provided_by: &str,
) -> LedgerResult<ReasonFields> {
    let reason_type = ReasonType::parse(reason_type)
        .ok_or_else(|| LedgerError::validation("Reason must be OPS or OTHERS."))?;
    let other_details = other_details.trim();
    let mut provided_by = provided_by.trim().to_string();

    match reason_type {
        ReasonType::Ops => {
            let weekend = weekend_ops_date.trim();
            if weekend.is_empty() {
                return Err(LedgerError::validation(
                    "Please provide the Weekend Ops duty date.",
                ));
            }
            let weekend = NaiveDate::parse_from_str(weekend, "%Y-%m-%d").map_err(|_| {
                LedgerError::validation("Please provide the Weekend Ops duty date.")
            })?;
            if !is_weekend_date(weekend) {
                return Err(LedgerError::validation(
                    "Weekend Ops duty date must be Saturday or Sunday.",
                ));
            }
            if provided_by.is_empty() {
                provided_by = "Yourself".to_string();
            }
            Ok(ReasonFields {
                reason_type,
                weekend_ops_duty_date: Some(weekend),
                reason_details: format!("Weekend Ops on {}", weekend.format("%Y-%m-%d")),
                provided_by,
            })
        }
        ReasonType::Others => {
            if other_details.is_empty() {
                return Err(LedgerError::validation(
                    "Please provide comments/details for Others.",
                ));
            }
            if provided_by.is_empty() {
                return Err(LedgerError::validation("Please fill in \"Provided by who\"."));
            }
            Ok(ReasonFields {
                reason_type,
                weekend_ops_duty_date: None,
                reason_details: other_details.to_string(),
                provided_by,
            })
        }
    }
}

/// Creates a granted off-day credit.
///
/// Validation order: date, duration type, reason branch. On success the
/// grant starts unused with its full duration remaining. Creation is not
/// audit-logged; the ledger row is its own creation record.
pub fn create_grant(ledger: &mut Ledger, request: CreateGrantRequest) -> LedgerResult<GrantCreated> {
    let personnel = normalize_personnel(&request.personnel);

    let granted_date = parse_date_input(&request.granted_date, "Invalid date. Use YYYY-MM-DD.")?;

    let duration_type = DurationType::parse(&request.duration_type)
        .ok_or_else(|| LedgerError::validation("Duration must be FULL or HALF."))?;

    let reason = validate_reason(
        &request.reason_type,
        &request.weekend_ops_date,
        &request.other_details,
        &request.provided_by,
    )?;

    let id = ledger.grants.next_id();
    let duration_value = duration_type.value();

    ledger.grants.insert(GrantRecord {
        id: id.clone(),
        personnel: personnel.clone(),
        granted_date,
        duration_type,
        duration_value,
        reason_type: reason.reason_type,
        weekend_ops_duty_date: reason.weekend_ops_duty_date,
        reason_details: reason.reason_details,
        provided_by: reason.provided_by,
        used: Decimal::ZERO,
        remaining: duration_value,
        status: GrantStatus::Unused,
        created_at: Utc::now(),
    });

    let message = format!(
        "Added {} ({}) off day as {} for {}.",
        duration_type.label(),
        format_duration(duration_value),
        id,
        personnel
    );

    Ok(GrantCreated { id, message })
}
