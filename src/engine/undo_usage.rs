//! Usage undo: full release and removal of a usage record.

use serde_json::json;
use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::AuditAction;
use crate::store::{normalize_personnel, Ledger};

use super::allocation::apply_releases;

/// The outcome of a successful undo.
#[derive(Debug, Clone)]
pub struct UsageUndone {
    /// Human-readable confirmation.
    pub message: String,
}

/// Undoes a usage event: every allocation is returned to its grant in full
/// and the usage record is deleted.
///
/// A usage referencing a grant that no longer exists indicates prior data
/// corruption; the operation aborts without partial writes.
pub fn undo_usage(ledger: &mut Ledger, personnel: &str, use_id: &str) -> LedgerResult<UsageUndone> {
    let personnel = normalize_personnel(personnel);
    let use_id = use_id.trim().to_string();

    let usage = ledger
        .usages
        .get_for_personnel(&use_id, &personnel)
        .ok_or_else(|| LedgerError::UsageNotFound {
            use_id: use_id.clone(),
        })?;
    let before = usage.snapshot();
    let allocations = usage.allocations.clone();

    for allocation in &allocations {
        if ledger
            .grants
            .get_for_personnel(&allocation.grant_id, &personnel)
            .is_none()
        {
            warn!(
                use_id = %use_id,
                grant_id = %allocation.grant_id,
                "usage references a missing grant; ledger state is corrupted"
            );
            return Err(LedgerError::DanglingAllocation {
                grant_id: allocation.grant_id.clone(),
            });
        }
    }

    apply_releases(&mut ledger.grants, &allocations);
    ledger.usages.remove(&use_id);

    let summary = format!(
        "Undid {}. Restored {} day from: {}. Intended date was {} ({}).",
        use_id, before["durationUsed"].as_str().unwrap_or("-"),
        before["offIdsUsed"].as_str().unwrap_or("-"),
        before["dateIntended"].as_str().unwrap_or("-"),
        before["session"].as_str().unwrap_or("-"),
    );
    ledger.audit.append(
        AuditAction::UndoUsed,
        &personnel,
        "Off Used",
        &use_id,
        &summary,
        &before,
        &json!({ "deleted": true }),
    );

    Ok(UsageUndone {
        message: format!("Undid {}. Allocated Off balance has been restored.", use_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_grant, create_usage, CreateGrantRequest, CreateUsageRequest};
    use crate::models::GrantStatus;
    use rust_decimal::Decimal;

    fn seeded_ledger() -> (Ledger, String) {
        let mut ledger = Ledger::new(vec!["Alice".to_string()]);
        create_grant(
            &mut ledger,
            CreateGrantRequest {
                personnel: "Alice".to_string(),
                granted_date: "2026-03-02".to_string(),
                duration_type: "FULL".to_string(),
                reason_type: "OPS".to_string(),
                weekend_ops_date: "2026-02-28".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        let use_id = create_usage(
            &mut ledger,
            CreateUsageRequest {
                personnel: "Alice".to_string(),
                intended_date: "2026-03-09".to_string(),
                session: "FULL".to_string(),
                selected_ids: vec!["G-0001".to_string()],
                comments: String::new(),
            },
        )
        .unwrap()
        .use_id;
        (ledger, use_id)
    }

    #[test]
    fn test_undo_restores_grant_and_removes_usage() {
        let (mut ledger, use_id) = seeded_ledger();

        let undone = undo_usage(&mut ledger, "Alice", &use_id).unwrap();
        assert_eq!(
            undone.message,
            "Undid U-0001. Allocated Off balance has been restored."
        );

        let grant = ledger.grants.get("G-0001").unwrap();
        assert_eq!(grant.remaining, Decimal::ONE);
        assert_eq!(grant.used, Decimal::ZERO);
        assert_eq!(grant.status, GrantStatus::Unused);
        assert!(ledger.usages.is_empty());
    }

    #[test]
    fn test_undo_writes_audit_entry() {
        let (mut ledger, use_id) = seeded_ledger();
        undo_usage(&mut ledger, "Alice", &use_id).unwrap();

        assert_eq!(ledger.audit.len(), 1);
        let entry = &ledger.audit.entries()[0];
        assert_eq!(entry.action.label(), "UNDO_USED");
        assert_eq!(entry.record_id, "U-0001");
        assert_eq!(
            entry.summary,
            "Undid U-0001. Restored 1 day from: G-0001 (1). Intended date was 2026-03-09 (Full Day)."
        );
        assert_eq!(entry.after, "{\"deleted\":true}");
    }

    #[test]
    fn test_undo_unknown_use_id() {
        let (mut ledger, _) = seeded_ledger();
        let err = undo_usage(&mut ledger, "Alice", "U-9999").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Use ID U-9999 not found for selected personnel."
        );
    }

    #[test]
    fn test_undo_with_missing_grant_aborts_cleanly() {
        let (mut ledger, use_id) = seeded_ledger();
        ledger.grants.remove("G-0001");

        let err = undo_usage(&mut ledger, "Alice", &use_id).unwrap_err();
        assert_eq!(err.to_string(), "Granted row not found for OFF ID G-0001.");
        // The usage record survives the failed undo.
        assert!(ledger.usages.get(&use_id).is_some());
        assert!(ledger.audit.is_empty());
    }
}
