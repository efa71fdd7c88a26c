//! Roster configuration types.

use serde::{Deserialize, Serialize};

/// The personnel roster, deserialized from `roster.yaml`.
///
/// # Example
///
/// ```yaml
/// personnel:
///   - Alice
///   - Bob
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// The registered personnel names.
    #[serde(default)]
    personnel: Vec<String>,
}

impl Roster {
    /// Builds a roster from a list of names.
    pub fn new(personnel: Vec<String>) -> Self {
        Roster { personnel }
    }

    /// The configured names, in file order.
    pub fn names(&self) -> &[String] {
        &self.personnel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_deserializes_names() {
        let roster: Roster = serde_yaml::from_str("personnel:\n  - Alice\n  - Bob\n").unwrap();
        assert_eq!(roster.names(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_roster_defaults_to_empty() {
        let roster: Roster = serde_yaml::from_str("{}").unwrap();
        assert!(roster.names().is_empty());
    }
}
