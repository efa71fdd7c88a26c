//! Grant editing.

use crate::duration::{format_duration, round1};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    build_change_summary, compute_status, AuditAction, DurationType, GRANT_FIELD_LABELS,
};
use crate::store::{normalize_personnel, Ledger};

use super::create_grant::validate_reason;
use super::parse_date_input;

/// Input for editing a granted off-day credit: a full replacement of its
/// editable fields.
#[derive(Debug, Clone, Default)]
pub struct EditGrantRequest {
    /// Owner of the grant.
    pub personnel: String,
    /// The grant to edit.
    pub id: String,
    /// New grant date as `YYYY-MM-DD`; blank defaults to today.
    pub granted_date: String,
    /// FULL or HALF.
    pub duration_type: String,
    /// OPS or OTHERS.
    pub reason_type: String,
    /// For OPS: the Saturday/Sunday duty date.
    pub weekend_ops_date: String,
    /// For OTHERS: free-text reason details.
    pub other_details: String,
    /// Who provided the credit.
    pub provided_by: String,
}

/// The outcome of a successful grant edit.
#[derive(Debug, Clone)]
pub struct GrantEdited {
    /// Human-readable confirmation.
    pub message: String,
}

/// Edits a grant in place.
///
/// The new duration must not shrink below the amount already consumed.
/// Remaining and status are recomputed from the new duration and the
/// untouched used amount.
pub fn edit_grant(ledger: &mut Ledger, request: EditGrantRequest) -> LedgerResult<GrantEdited> {
    let personnel = normalize_personnel(&request.personnel);
    let id = request.id.trim().to_string();

    let grant = ledger
        .grants
        .get_for_personnel(&id, &personnel)
        .ok_or_else(|| LedgerError::GrantNotFound { id: id.clone() })?;
    let before = grant.snapshot();
    let used = grant.used;

    let granted_date = parse_date_input(&request.granted_date, "Invalid date. Use YYYY-MM-DD.")?;

    let duration_type = DurationType::parse(&request.duration_type)
        .ok_or_else(|| LedgerError::validation("Duration must be FULL or HALF."))?;
    let duration_value = duration_type.value();

    if duration_value < used {
        return Err(LedgerError::BlockedByUsage {
            message: format!(
                "Cannot reduce duration below already used amount ({}).",
                format_duration(used)
            ),
        });
    }

    let reason = validate_reason(
        &request.reason_type,
        &request.weekend_ops_date,
        &request.other_details,
        &request.provided_by,
    )?;

    let remaining = round1(duration_value - used);
    let status = compute_status(used, remaining);

    let record = ledger
        .grants
        .get_mut(&id)
        .ok_or_else(|| LedgerError::GrantNotFound { id: id.clone() })?;
    record.granted_date = granted_date;
    record.duration_type = duration_type;
    record.duration_value = duration_value;
    record.reason_type = reason.reason_type;
    record.weekend_ops_duty_date = reason.weekend_ops_duty_date;
    record.reason_details = reason.reason_details;
    record.provided_by = reason.provided_by;
    record.remaining = remaining;
    record.status = status;
    let after = record.snapshot();

    let summary = build_change_summary(&before, &after, GRANT_FIELD_LABELS);
    ledger.audit.append(
        AuditAction::EditGranted,
        &personnel,
        "Off Granted",
        &id,
        &summary,
        &before,
        &after,
    );

    Ok(GrantEdited {
        message: format!("Updated {}.", id),
    })
}
