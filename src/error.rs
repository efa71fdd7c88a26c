//! Error types for the off-day ledger engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during ledger operations. Every
//! variant's display string is the user-facing message shown to the caller.

use thiserror::Error;

/// The main error type for the off-day ledger engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. No operation
/// mutates the stores when it returns an error.
///
/// # Example
///
/// ```
/// use offday_engine::error::LedgerError;
///
/// let error = LedgerError::GrantNotFound {
///     id: "G-0042".to_string(),
/// };
/// assert_eq!(error.to_string(), "OFF ID G-0042 not found for selected personnel.");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Roster configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Malformed or missing input field (bad date, bad enum, missing text).
    #[error("{message}")]
    Validation {
        /// The user-facing validation message.
        message: String,
    },

    /// Referenced grant id does not exist for the personnel or has nothing left.
    #[error("OFF ID {id} does not exist or has no remaining balance.")]
    UnknownOrExhaustedGrant {
        /// The offending grant id.
        id: String,
    },

    /// Exactly one half day was selected against a full-day requirement.
    #[error("You selected only 0.5 day. For Full Day OFF, choose another ID to make a total of 1 day.")]
    HalfDayShortfall,

    /// Selected grants' remaining sum cannot cover the requested duration.
    #[error("Selected IDs total {selected} day, but {required} day is required.")]
    InsufficientBalance {
        /// Formatted total remaining across the selected grants.
        selected: String,
        /// Formatted duration the session requires.
        required: String,
    },

    /// The greedy draw ran out of candidates despite the pre-check passing.
    #[error("Unable to allocate enough off balance from selected IDs. Please try again.")]
    AllocationShortfall,

    /// A usage edit needs more duration but no additional grant ids were given.
    #[error("Need additional {delta} day. Please provide more OFF ID(s).")]
    AdditionalIdsRequired {
        /// Formatted extra duration still needed.
        delta: String,
    },

    /// The additional grant ids supplied to a usage edit cannot cover the delta.
    #[error("Additional OFF IDs are insufficient. Still need {still_needed} day.")]
    AdditionalIdsInsufficient {
        /// Formatted duration still uncovered.
        still_needed: String,
    },

    /// A usage edit could not release enough allocation to shrink the record.
    #[error("Unable to release enough allocation for {use_id}.")]
    ReleaseShortfall {
        /// The usage record being edited.
        use_id: String,
    },

    /// A grant edit or delete is blocked by already-consumed amount.
    #[error("{message}")]
    BlockedByUsage {
        /// The user-facing message naming the blocking amount.
        message: String,
    },

    /// An edit would leave a usage record with no backing allocation.
    #[error("No OFF IDs remain allocated after edit.")]
    NoAllocationsRemain,

    /// A usage record references a grant that no longer exists.
    ///
    /// This indicates prior data corruption; the operation aborts without
    /// partial writes.
    #[error("Granted row not found for OFF ID {grant_id}.")]
    DanglingAllocation {
        /// The missing grant id.
        grant_id: String,
    },

    /// Referenced grant id was not found for the personnel.
    #[error("OFF ID {id} not found for selected personnel.")]
    GrantNotFound {
        /// The grant id that was not found.
        id: String,
    },

    /// Referenced usage id was not found for the personnel.
    #[error("Use ID {use_id} not found for selected personnel.")]
    UsageNotFound {
        /// The usage id that was not found.
        use_id: String,
    },

    /// The personnel name already exists in the registry.
    #[error("Personnel \"{name}\" already exists.")]
    PersonnelExists {
        /// The duplicate name.
        name: String,
    },

    /// The personnel name was not found in the registry.
    #[error("Personnel \"{name}\" not found.")]
    PersonnelNotFound {
        /// The unknown name.
        name: String,
    },

    /// The registry must always keep at least one personnel name.
    #[error("At least one personnel must remain.")]
    LastPersonnel,

    /// The personnel still owns ledger records and cascade was not requested.
    #[error("Personnel \"{name}\" has existing records. Tick \"Delete all related records\" to proceed.")]
    PersonnelHasRecords {
        /// The personnel that still owns records.
        name: String,
    },
}

impl LedgerError {
    /// Convenience constructor for a [`LedgerError::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_grant_displays_id() {
        let error = LedgerError::UnknownOrExhaustedGrant {
            id: "G-0007".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "OFF ID G-0007 does not exist or has no remaining balance."
        );
    }

    #[test]
    fn test_half_day_shortfall_message() {
        assert_eq!(
            LedgerError::HalfDayShortfall.to_string(),
            "You selected only 0.5 day. For Full Day OFF, choose another ID to make a total of 1 day."
        );
    }

    #[test]
    fn test_insufficient_balance_displays_amounts() {
        let error = LedgerError::InsufficientBalance {
            selected: "0.5".to_string(),
            required: "1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Selected IDs total 0.5 day, but 1 day is required."
        );
    }

    #[test]
    fn test_dangling_allocation_displays_grant_id() {
        let error = LedgerError::DanglingAllocation {
            grant_id: "G-0003".to_string(),
        };
        assert_eq!(error.to_string(), "Granted row not found for OFF ID G-0003.");
    }

    #[test]
    fn test_validation_passes_message_through() {
        let error = LedgerError::validation("Invalid date. Use YYYY-MM-DD.");
        assert_eq!(error.to_string(), "Invalid date. Use YYYY-MM-DD.");
    }

    #[test]
    fn test_personnel_has_records_message() {
        let error = LedgerError::PersonnelHasRecords {
            name: "Alice".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Personnel \"Alice\" has existing records. Tick \"Delete all related records\" to proceed."
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LedgerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> LedgerResult<()> {
            Err(LedgerError::UsageNotFound {
                use_id: "U-0001".to_string(),
            })
        }

        fn propagates_error() -> LedgerResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
