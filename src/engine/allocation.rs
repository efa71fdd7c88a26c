//! Shared allocation plumbing: greedy draws and reverse releases.
//!
//! Both halves work on a plan first and touch the grant store only at
//! commit, so a failing operation never leaves partial state.

use rust_decimal::Decimal;

use crate::duration::round1;
use crate::models::{compute_status, Allocation};
use crate::store::GrantStore;

/// Greedily draws `needed` across candidates in caller-supplied order.
///
/// Each candidate is a `(grant_id, remaining)` pair reflecting live store
/// state. Candidates with nothing remaining are skipped. Returns the draw
/// list and whatever could not be covered.
pub(crate) fn plan_draw<'a, I>(candidates: I, needed: Decimal) -> (Vec<Allocation>, Decimal)
where
    I: IntoIterator<Item = (&'a str, Decimal)>,
{
    let mut still_needed = round1(needed);
    let mut draws = Vec::new();

    for (grant_id, remaining) in candidates {
        if still_needed <= Decimal::ZERO {
            break;
        }
        if remaining <= Decimal::ZERO {
            continue;
        }
        let amount = round1(remaining.min(still_needed));
        draws.push(Allocation {
            grant_id: grant_id.to_string(),
            amount,
        });
        still_needed = round1(still_needed - amount);
    }

    (draws, still_needed)
}

/// Plans a release of `amount` from an allocation list, newest first.
///
/// Walks the list backward, shrinking each allocation until the release is
/// satisfied. Returns the per-grant release amounts (in walk order) and the
/// adjusted allocation list with zeroed entries dropped, plus whatever could
/// not be released.
pub(crate) fn plan_release(
    allocations: &[Allocation],
    amount: Decimal,
) -> (Vec<Allocation>, Vec<Allocation>, Decimal) {
    let mut release_needed = round1(amount);
    let mut adjusted: Vec<Allocation> = allocations.to_vec();
    let mut releases = Vec::new();

    for alloc in adjusted.iter_mut().rev() {
        if release_needed <= Decimal::ZERO {
            break;
        }
        if alloc.amount <= Decimal::ZERO {
            continue;
        }
        let release = round1(alloc.amount.min(release_needed));
        alloc.amount = round1(alloc.amount - release);
        releases.push(Allocation {
            grant_id: alloc.grant_id.clone(),
            amount: release,
        });
        release_needed = round1(release_needed - release);
    }

    adjusted.retain(|a| a.amount > Decimal::ZERO);
    (releases, adjusted, release_needed)
}

/// Applies a draw plan to the grant store.
///
/// Every referenced grant must exist; callers validate that before
/// committing.
pub(crate) fn apply_draws(grants: &mut GrantStore, draws: &[Allocation]) {
    for draw in draws {
        if let Some(grant) = grants.get_mut(&draw.grant_id) {
            grant.used = round1(grant.used + draw.amount);
            grant.remaining = round1(grant.remaining - draw.amount);
            grant.status = compute_status(grant.used, grant.remaining);
        }
    }
}

/// Applies a release plan to the grant store, clamping used at zero.
pub(crate) fn apply_releases(grants: &mut GrantStore, releases: &[Allocation]) {
    for release in releases {
        if let Some(grant) = grants.get_mut(&release.grant_id) {
            grant.used = round1((grant.used - release.amount).max(Decimal::ZERO));
            grant.remaining = round1(grant.remaining + release.amount);
            grant.status = compute_status(grant.used, grant.remaining);
        }
    }
}

/// Merges a draw into an allocation list; an existing entry for the same
/// grant accumulates instead of duplicating.
pub(crate) fn merge_allocation(allocations: &mut Vec<Allocation>, grant_id: &str, amount: Decimal) {
    if amount <= Decimal::ZERO {
        return;
    }
    if let Some(existing) = allocations.iter_mut().find(|a| a.grant_id == grant_id) {
        existing.amount = round1(existing.amount + amount);
        return;
    }
    allocations.push(Allocation {
        grant_id: grant_id.to_string(),
        amount: round1(amount),
    });
}
