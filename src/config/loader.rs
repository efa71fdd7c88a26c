//! Roster loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

use super::types::Roster;

/// Loads the personnel roster from a YAML file.
///
/// # Example
///
/// ```no_run
/// use offday_engine::config::RosterLoader;
///
/// let roster = RosterLoader::load("./config/roster.yaml")?;
/// for name in roster.names() {
///     println!("personnel: {}", name);
/// }
/// # Ok::<(), offday_engine::error::LedgerError>(())
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Loads a roster from the given path.
    ///
    /// Returns `ConfigNotFound` when the file is missing and
    /// `ConfigParseError` when it is not valid roster YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Roster> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|err| LedgerError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = RosterLoader::load("/nonexistent/roster.yaml").unwrap_err();
        assert!(matches!(err, LedgerError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/roster.yaml"));
    }

    #[test]
    fn test_load_valid_roster() {
        let dir = std::env::temp_dir().join("offday-roster-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roster.yaml");
        std::fs::write(&path, "personnel:\n  - Alice\n").unwrap();

        let roster = RosterLoader::load(&path).unwrap();
        assert_eq!(roster.names(), ["Alice"]);
    }

    #[test]
    fn test_load_invalid_yaml_is_parse_error() {
        let dir = std::env::temp_dir().join("offday-roster-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        std::fs::write(&path, "personnel: {not: [valid").unwrap();

        let err = RosterLoader::load(&path).unwrap_err();
        assert!(matches!(err, LedgerError::ConfigParseError { .. }));
    }
}
