//! Personnel registry management.

use crate::error::{LedgerError, LedgerResult};
use crate::store::Ledger;

/// Input for deleting a personnel from the registry.
#[derive(Debug, Clone, Default)]
pub struct DeletePersonnelRequest {
    /// The exact name to delete (matched case-insensitively).
    pub name: String,
    /// Also delete all grants, usages, and log rows owned by the name.
    pub delete_data: bool,
}

/// The outcome of a registry change.
#[derive(Debug, Clone)]
pub struct PersonnelChanged {
    /// Human-readable confirmation.
    pub message: String,
}

/// Adds a personnel name to the registry.
///
/// Names are unique case-insensitively.
pub fn add_personnel(ledger: &mut Ledger, name: &str) -> LedgerResult<PersonnelChanged> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(LedgerError::validation("Name is required."));
    }
    if ledger.find_personnel(&name).is_some() {
        return Err(LedgerError::PersonnelExists { name });
    }

    ledger.push_personnel(name.clone());
    Ok(PersonnelChanged {
        message: format!("Added personnel: {}", name),
    })
}

/// Deletes a personnel name from the registry.
///
/// At least one name must always remain. A personnel that still owns ledger
/// records can only be deleted with `delete_data`, which cascades to their
/// grants, usages, and log rows.
pub fn delete_personnel(
    ledger: &mut Ledger,
    request: DeletePersonnelRequest,
) -> LedgerResult<PersonnelChanged> {
    if ledger.personnel_names().len() <= 1 {
        return Err(LedgerError::LastPersonnel);
    }

    let name = ledger
        .find_personnel(&request.name)
        .ok_or_else(|| LedgerError::PersonnelNotFound {
            name: request.name.trim().to_string(),
        })?
        .to_string();

    let has_records = ledger.grants.for_personnel(&name).next().is_some()
        || ledger.usages.for_personnel(&name).next().is_some()
        || ledger.audit.for_personnel(&name).next().is_some();

    if has_records && !request.delete_data {
        return Err(LedgerError::PersonnelHasRecords { name });
    }

    if request.delete_data {
        ledger.usages.remove_for_personnel(&name);
        ledger.grants.remove_for_personnel(&name);
        ledger.audit.remove_for_personnel(&name);
    }
    ledger.remove_personnel(&name);

    let message = if request.delete_data {
        format!("Deleted personnel \"{}\" and all related records.", name)
    } else {
        format!("Deleted personnel \"{}\".", name)
    };
    Ok(PersonnelChanged { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_grant, CreateGrantRequest};

    fn two_person_ledger() -> Ledger {
        Ledger::new(vec!["Alice".to_string(), "Bob".to_string()])
    }

    #[test]
    fn test_add_personnel() {
        let mut ledger = two_person_ledger();
        let changed = add_personnel(&mut ledger, "Carol").unwrap();
        assert_eq!(changed.message, "Added personnel: Carol");
        assert_eq!(ledger.personnel_names().len(), 3);
    }

    #[test]
    fn test_add_duplicate_is_case_insensitive() {
        let mut ledger = two_person_ledger();
        let err = add_personnel(&mut ledger, "alice").unwrap_err();
        assert_eq!(err.to_string(), "Personnel \"alice\" already exists.");
    }

    #[test]
    fn test_add_blank_rejected() {
        let mut ledger = two_person_ledger();
        let err = add_personnel(&mut ledger, "   ").unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");
    }

    #[test]
    fn test_delete_personnel_without_records() {
        let mut ledger = two_person_ledger();
        let changed = delete_personnel(
            &mut ledger,
            DeletePersonnelRequest {
                name: "bob".to_string(),
                delete_data: false,
            },
        )
        .unwrap();
        assert_eq!(changed.message, "Deleted personnel \"Bob\".");
        assert_eq!(ledger.personnel_names(), ["Alice"]);
    }

    #[test]
    fn test_last_personnel_cannot_be_deleted() {
        let mut ledger = Ledger::new(vec!["Alice".to_string()]);
        let err = delete_personnel(
            &mut ledger,
            DeletePersonnelRequest {
                name: "Alice".to_string(),
                delete_data: false,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "At least one personnel must remain.");
    }

    #[test]
    fn test_personnel_with_records_needs_cascade() {
        let mut ledger = two_person_ledger();
        create_grant(
            &mut ledger,
            CreateGrantRequest {
                personnel: "Bob".to_string(),
                granted_date: "2026-03-02".to_string(),
                duration_type: "FULL".to_string(),
                reason_type: "OPS".to_string(),
                weekend_ops_date: "2026-02-28".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let err = delete_personnel(
            &mut ledger,
            DeletePersonnelRequest {
                name: "Bob".to_string(),
                delete_data: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::PersonnelHasRecords { .. }));

        let changed = delete_personnel(
            &mut ledger,
            DeletePersonnelRequest {
                name: "Bob".to_string(),
                delete_data: true,
            },
        )
        .unwrap();
        assert_eq!(
            changed.message,
            "Deleted personnel \"Bob\" and all related records."
        );
        assert!(ledger.grants.is_empty());
    }

    #[test]
    fn test_delete_unknown_personnel() {
        let mut ledger = two_person_ledger();
        let err = delete_personnel(
            &mut ledger,
            DeletePersonnelRequest {
                name: "Carol".to_string(),
                delete_data: false,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Personnel \"Carol\" not found.");
    }
}
