//! Per-personnel aggregate sums.

use rust_decimal::Decimal;

use crate::duration::round1;
use crate::store::{normalize_personnel, Ledger};

/// Per-personnel totals derived by scanning the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregates {
    /// Sum of duration values across the personnel's grants.
    pub total_granted: Decimal,
    /// Sum of durations across the personnel's usage records.
    pub total_used: Decimal,
    /// Sum of remaining balances across the personnel's grants.
    pub balance_remaining: Decimal,
}

/// Computes the personnel's granted/used/balance totals.
///
/// Recomputed by scan on every call; nothing is incrementally maintained.
pub fn get_aggregates(ledger: &Ledger, personnel: &str) -> Aggregates {
    let personnel = normalize_personnel(personnel);

    let total_granted = round1(
        ledger
            .grants
            .for_personnel(&personnel)
            .map(|g| g.duration_value)
            .sum(),
    );
    let total_used = round1(
        ledger
            .usages
            .for_personnel(&personnel)
            .map(|u| u.duration)
            .sum(),
    );
    let balance_remaining = round1(
        ledger
            .grants
            .for_personnel(&personnel)
            .map(|g| g.remaining)
            .sum(),
    );

    Aggregates {
        total_granted,
        total_used,
        balance_remaining,
    }
}
