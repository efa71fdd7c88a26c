//! Usage editing: duration deltas re-allocate against the grant store.

use rust_decimal::Decimal;

use crate::duration::{format_duration, round1};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    build_change_summary, Allocation, AuditAction, Session, USAGE_FIELD_LABELS,
};
use crate::store::{normalize_personnel, Ledger};

use super::allocation::{apply_draws, apply_releases, merge_allocation, plan_draw, plan_release};
use super::{clean_id_list, parse_date_input};

/// Input for editing a usage event.
#[derive(Debug, Clone, Default)]
pub struct EditUsageRequest {
    /// Owner of the usage.
    pub personnel: String,
    /// The usage to edit.
    pub use_id: String,
    /// New intended date as `YYYY-MM-DD`; blank defaults to today.
    pub intended_date: String,
    /// New session: FULL, AM, or PM.
    pub session: String,
    /// New comments.
    pub comments: String,
    /// Extra grant ids to draw from when the new session needs more
    /// duration than before.
    pub additional_ids: Vec<String>,
}

/// The outcome of a successful usage edit.
#[derive(Debug, Clone)]
pub struct UsageEdited {
    /// Human-readable confirmation.
    pub message: String,
}

/// Edits a usage event.
///
/// A session change that needs more duration draws the delta from the
/// caller-supplied additional ids (greedy, caller order, merging into the
/// existing allocation list). A change that needs less releases the delta
/// from the existing allocations in reverse order, newest first. Everything
/// is planned against live state before any store write.
pub fn edit_usage(ledger: &mut Ledger, request: EditUsageRequest) -> LedgerResult<UsageEdited> {
    let personnel = normalize_personnel(&request.personnel);
    let use_id = request.use_id.trim().to_string();

    let usage = ledger
        .usages
        .get_for_personnel(&use_id, &personnel)
        .ok_or_else(|| LedgerError::UsageNotFound {
            use_id: use_id.clone(),
        })?;
    let before = usage.snapshot();
    let current_duration = usage.duration;
    let mut allocations = usage.allocations.clone();

    let intended_date = parse_date_input(
        &request.intended_date,
        "Invalid intended date. Use YYYY-MM-DD.",
    )?;
    let session = Session::parse(&request.session)
        .ok_or_else(|| LedgerError::validation("Session must be FULL, AM, or PM."))?;
    let target_duration = session.required_duration();
    let delta = round1(target_duration - current_duration);

    let mut draws: Vec<Allocation> = Vec::new();
    let mut releases: Vec<Allocation> = Vec::new();

    if delta > Decimal::ZERO {
        let additional_ids = clean_id_list(&request.additional_ids);
        if additional_ids.is_empty() {
            return Err(LedgerError::AdditionalIdsRequired {
                delta: format_duration(delta),
            });
        }

        // Unknown or exhausted additional ids are skipped rather than hard
        // failures; only the covered total matters here.
        let candidates: Vec<(String, Decimal)> = additional_ids
            .iter()
            .filter_map(|id| {
                ledger
                    .grants
                    .get_for_personnel(id, &personnel)
                    .filter(|g| g.remaining > Decimal::ZERO)
                    .map(|g| (g.id.clone(), g.remaining))
            })
            .collect();

        let (planned, still_needed) =
            plan_draw(candidates.iter().map(|(id, r)| (id.as_str(), *r)), delta);
        if still_needed > Decimal::ZERO {
            return Err(LedgerError::AdditionalIdsInsufficient {
                still_needed: format_duration(still_needed),
            });
        }

        for draw in &planned {
            merge_allocation(&mut allocations, &draw.grant_id, draw.amount);
        }
        draws = planned;
    } else if delta < Decimal::ZERO {
        let (planned, adjusted, leftover) = plan_release(&allocations, -delta);

        for release in &planned {
            if ledger
                .grants
                .get_for_personnel(&release.grant_id, &personnel)
                .is_none()
            {
                return Err(LedgerError::DanglingAllocation {
                    grant_id: release.grant_id.clone(),
                });
            }
        }
        if leftover > Decimal::ZERO {
            return Err(LedgerError::ReleaseShortfall {
                use_id: use_id.clone(),
            });
        }

        allocations = adjusted;
        releases = planned;
    }

    if allocations.is_empty() {
        return Err(LedgerError::NoAllocationsRemain);
    }

    // Plan complete; commit.
    apply_draws(&mut ledger.grants, &draws);
    apply_releases(&mut ledger.grants, &releases);

    let record = ledger
        .usages
        .get_mut(&use_id)
        .ok_or_else(|| LedgerError::UsageNotFound {
            use_id: use_id.clone(),
        })?;
    record.intended_date = intended_date;
    record.session = session;
    record.duration = target_duration;
    record.allocations = allocations;
    record.comments = request.comments.trim().to_string();
    let after = record.snapshot();

    let summary = build_change_summary(&before, &after, USAGE_FIELD_LABELS);
    ledger.audit.append(
        AuditAction::EditUsed,
        &personnel,
        "Off Used",
        &use_id,
        &summary,
        &before,
        &after,
    );

    Ok(UsageEdited {
        message: format!(
            "Updated {} to {} ({} day).",
            use_id,
            session.label(),
            format_duration(target_duration)
        ),
    })
}
