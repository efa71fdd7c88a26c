//! Usage creation: the greedy allocation path.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::duration::{format_duration, round1, FULL_DAY, HALF_DAY};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{format_allocations, Session, UsageRecord};
use crate::store::{normalize_personnel, Ledger};

use super::allocation::{apply_draws, plan_draw};
use super::{clean_id_list, parse_date_input};

/// Input for recording a usage event.
#[derive(Debug, Clone, Default)]
pub struct CreateUsageRequest {
    /// Owner of the usage.
    pub personnel: String,
    /// Intended date as `YYYY-MM-DD`; blank defaults to today.
    pub intended_date: String,
    /// FULL, AM, or PM.
    pub session: String,
    /// Candidate grant ids, in the caller's preferred draw order.
    pub selected_ids: Vec<String>,
    /// Optional free-text comments.
    pub comments: String,
}

/// The outcome of a successful usage creation.
#[derive(Debug, Clone)]
pub struct UsageCreated {
    /// The assigned use id.
    pub use_id: String,
    /// Human-readable confirmation naming the allocations.
    pub message: String,
}

/// Records a usage event, allocating its duration across the selected
/// grants.
///
/// The candidates are drawn greedily in caller-supplied order. All
/// validation happens against live store state before anything is written:
/// unresolved or exhausted ids fail hard, and the remaining sum is checked
/// against the session's required duration up front.
pub fn create_usage(ledger: &mut Ledger, request: CreateUsageRequest) -> LedgerResult<UsageCreated> {
    let personnel = normalize_personnel(&request.personnel);

    let intended_date = parse_date_input(
        &request.intended_date,
        "Invalid intended date. Use YYYY-MM-DD.",
    )?;

    let session = Session::parse(&request.session)
        .ok_or_else(|| LedgerError::validation("Session must be AM, PM, or FULL."))?;
    let duration_needed = session.required_duration();

    let selected_ids = clean_id_list(&request.selected_ids);
    if selected_ids.is_empty() {
        return Err(LedgerError::validation("Please choose at least one OFF ID."));
    }

    // Resolve every candidate before planning; an unknown id or one with
    // nothing left is a hard failure.
    let mut candidates: Vec<(&str, Decimal)> = Vec::with_capacity(selected_ids.len());
    for id in &selected_ids {
        let grant = ledger
            .grants
            .get_for_personnel(id, &personnel)
            .filter(|g| g.remaining > Decimal::ZERO)
            .ok_or_else(|| LedgerError::UnknownOrExhaustedGrant { id: id.clone() })?;
        candidates.push((grant.id.as_str(), grant.remaining));
    }

    let selected_total = round1(candidates.iter().map(|(_, r)| *r).sum());
    if selected_total < duration_needed {
        if duration_needed == FULL_DAY && selected_total == HALF_DAY {
            return Err(LedgerError::HalfDayShortfall);
        }
        return Err(LedgerError::InsufficientBalance {
            selected: format_duration(selected_total),
            required: format_duration(duration_needed),
        });
    }

    let (allocations, still_needed) = plan_draw(candidates, duration_needed);
    // The pre-check guarantees coverage; re-verified defensively.
    if still_needed > Decimal::ZERO {
        return Err(LedgerError::AllocationShortfall);
    }

    apply_draws(&mut ledger.grants, &allocations);

    let use_id = ledger.usages.next_id();
    let display = format_allocations(&allocations);

    ledger.usages.insert(UsageRecord {
        use_id: use_id.clone(),
        personnel: personnel.clone(),
        intended_date,
        session,
        duration: duration_needed,
        allocations,
        comments: request.comments.trim().to_string(),
        created_at: Utc::now(),
    });

    info!(use_id = %use_id, personnel = %personnel, "recorded usage");

    let message = format!(
        "Recorded {} usage ({} day) for {} using {}.",
        session.label(),
        format_duration(duration_needed),
        personnel,
        display
    );

    Ok(UsageCreated { use_id, message })
}
