//! Grant deletion, single or batch, all-or-nothing.

use rust_decimal::Decimal;
use serde_json::json;

use crate::duration::format_duration;
use crate::error::{LedgerError, LedgerResult};
use crate::models::AuditAction;
use crate::store::{normalize_personnel, Ledger};

use super::clean_id_list;

/// Input for deleting one or more grants.
#[derive(Debug, Clone, Default)]
pub struct DeleteGrantsRequest {
    /// Owner of the grants.
    pub personnel: String,
    /// The grant ids to delete.
    pub ids: Vec<String>,
}

/// The outcome of a successful deletion.
#[derive(Debug, Clone)]
pub struct GrantsDeleted {
    /// How many grants were removed.
    pub deleted: usize,
    /// Human-readable confirmation.
    pub message: String,
}

/// Deletes grants, validating the whole batch before removing anything.
///
/// A grant with any consumed amount can never be deleted; the first
/// blocking or missing id fails the entire batch. One DELETE_GRANTED audit
/// entry summarizes the batch with snapshots of every removed record.
pub fn delete_grants(ledger: &mut Ledger, request: DeleteGrantsRequest) -> LedgerResult<GrantsDeleted> {
    let personnel = normalize_personnel(&request.personnel);

    let ids = clean_id_list(&request.ids);
    if ids.is_empty() {
        return Err(LedgerError::validation(
            "Please tick at least one OFF ID to delete.",
        ));
    }

    // All-or-nothing: validate every id before deleting any.
    let mut snapshots = Vec::with_capacity(ids.len());
    for id in &ids {
        let grant = ledger
            .grants
            .get_for_personnel(id, &personnel)
            .ok_or_else(|| LedgerError::GrantNotFound { id: id.clone() })?;
        if grant.used > Decimal::ZERO {
            return Err(LedgerError::BlockedByUsage {
                message: format!(
                    "Cannot delete {}. It already has used amount {}.",
                    id,
                    format_duration(grant.used)
                ),
            });
        }
        snapshots.push(grant.snapshot());
    }

    for id in &ids {
        ledger.grants.remove(id);
    }

    let joined = ids.join(", ");
    ledger.audit.append(
        AuditAction::DeleteGranted,
        &personnel,
        "Off Granted",
        &joined,
        &format!("Deleted {} Offs (Granted): {}.", ids.len(), joined),
        &json!(snapshots),
        &json!({ "deleted": true }),
    );

    Ok(GrantsDeleted {
        deleted: ids.len(),
        message: format!("Deleted {} Off Granted record(s).", ids.len()),
    })
}
