//! Read-side listing of grants still available for allocation.

use rust_decimal::Decimal;

use crate::store::{normalize_personnel, Ledger};

/// One selectable grant in a usage dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantOption {
    /// The grant id.
    pub id: String,
    /// How much of the grant is still unconsumed.
    pub remaining: Decimal,
    /// The display label naming the grant's reason.
    pub label: String,
}

/// Lists the personnel's grants with remaining balance, sorted by id
/// ascending.
pub fn list_available_grants(ledger: &Ledger, personnel: &str) -> Vec<GrantOption> {
    let personnel = normalize_personnel(personnel);
    ledger
        .grants
        .for_personnel(&personnel)
        .filter(|g| g.remaining > Decimal::ZERO)
        .map(|g| GrantOption {
            id: g.id.clone(),
            remaining: g.remaining,
            label: g.option_label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_grant, create_usage, CreateGrantRequest, CreateUsageRequest};
    use std::str::FromStr;

    fn seeded_ledger() -> Ledger {
        let mut ledger = Ledger::new(vec!["Alice".to_string(), "Bob".to_string()]);
        for personnel in ["Alice", "Alice", "Bob"] {
            create_grant(
                &mut ledger,
                CreateGrantRequest {
                    personnel: personnel.to_string(),
                    granted_date: "2026-03-02".to_string(),
                    duration_type: "FULL".to_string(),
                    reason_type: "OPS".to_string(),
                    weekend_ops_date: "2026-02-28".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        }
        ledger
    }

    #[test]
    fn test_lists_only_own_grants_in_id_order() {
        let ledger = seeded_ledger();
        let options = list_available_grants(&ledger, "Alice");
        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["G-0001", "G-0002"]);
    }

    #[test]
    fn test_exhausted_grants_are_hidden() {
        let mut ledger = seeded_ledger();
        create_usage(
            &mut ledger,
            CreateUsageRequest {
                personnel: "Alice".to_string(),
                intended_date: "2026-03-09".to_string(),
                session: "FULL".to_string(),
                selected_ids: vec!["G-0001".to_string()],
                comments: String::new(),
            },
        )
        .unwrap();

        let options = list_available_grants(&ledger, "Alice");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "G-0002");
    }

    #[test]
    fn test_option_label_and_remaining() {
        let mut ledger = seeded_ledger();
        create_usage(
            &mut ledger,
            CreateUsageRequest {
                personnel: "Alice".to_string(),
                intended_date: "2026-03-09".to_string(),
                session: "AM".to_string(),
                selected_ids: vec!["G-0001".to_string()],
                comments: String::new(),
            },
        )
        .unwrap();

        let options = list_available_grants(&ledger, "Alice");
        assert_eq!(
            options[0].remaining,
            Decimal::from_str("0.5").unwrap()
        );
        assert_eq!(
            options[0].label,
            "G-0001, 0.5 day, Weekend Ops on (2026-02-28)"
        );
    }
}
