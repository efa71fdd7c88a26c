//! Response types for the off-day ledger engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::{Aggregates, GrantOption};
use crate::error::LedgerError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        let (status, code) = match &error {
            LedgerError::ConfigNotFound { .. } | LedgerError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            LedgerError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            LedgerError::UnknownOrExhaustedGrant { .. } => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_OFF_ID")
            }
            LedgerError::HalfDayShortfall | LedgerError::InsufficientBalance { .. } => {
                (StatusCode::BAD_REQUEST, "INSUFFICIENT_BALANCE")
            }
            LedgerError::AdditionalIdsRequired { .. } => {
                (StatusCode::BAD_REQUEST, "ADDITIONAL_IDS_REQUIRED")
            }
            LedgerError::AdditionalIdsInsufficient { .. } => {
                (StatusCode::BAD_REQUEST, "ADDITIONAL_IDS_INSUFFICIENT")
            }
            LedgerError::BlockedByUsage { .. } => (StatusCode::BAD_REQUEST, "BLOCKED_BY_USAGE"),
            LedgerError::NoAllocationsRemain => {
                (StatusCode::BAD_REQUEST, "NO_ALLOCATIONS_REMAIN")
            }
            LedgerError::PersonnelExists { .. } => (StatusCode::BAD_REQUEST, "PERSONNEL_EXISTS"),
            LedgerError::LastPersonnel => (StatusCode::BAD_REQUEST, "LAST_PERSONNEL"),
            LedgerError::PersonnelHasRecords { .. } => {
                (StatusCode::BAD_REQUEST, "PERSONNEL_HAS_RECORDS")
            }
            LedgerError::GrantNotFound { .. } => (StatusCode::NOT_FOUND, "OFF_ID_NOT_FOUND"),
            LedgerError::UsageNotFound { .. } => (StatusCode::NOT_FOUND, "USE_ID_NOT_FOUND"),
            LedgerError::PersonnelNotFound { .. } => {
                (StatusCode::NOT_FOUND, "PERSONNEL_NOT_FOUND")
            }
            LedgerError::AllocationShortfall | LedgerError::ReleaseShortfall { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ALLOCATION_ERROR")
            }
            LedgerError::DanglingAllocation { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_INTEGRITY_ERROR")
            }
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

/// Success body for all mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Always true on the success path.
    pub ok: bool,
    /// The id assigned by a create operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable confirmation.
    pub message: String,
}

impl MutationResponse {
    /// Success body carrying a newly assigned id.
    pub fn with_id(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: Some(id.into()),
            message: message.into(),
        }
    }

    /// Success body with a confirmation message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: None,
            message: message.into(),
        }
    }
}

/// One selectable grant in the `GET /grants/available` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantOptionResponse {
    /// The grant id.
    pub id: String,
    /// How much of the grant is still unconsumed.
    pub remaining: Decimal,
    /// The display label naming the grant's reason.
    pub label: String,
}

impl From<GrantOption> for GrantOptionResponse {
    fn from(option: GrantOption) -> Self {
        GrantOptionResponse {
            id: option.id,
            remaining: option.remaining,
            label: option.label,
        }
    }
}

/// Response body for `GET /aggregates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatesResponse {
    /// Sum of duration values across the personnel's grants.
    pub total_granted: Decimal,
    /// Sum of durations across the personnel's usage records.
    pub total_used: Decimal,
    /// Sum of remaining balances across the personnel's grants.
    pub balance_remaining: Decimal,
}

impl From<Aggregates> for AggregatesResponse {
    fn from(aggregates: Aggregates) -> Self {
        AggregatesResponse {
            total_granted: aggregates.total_granted,
            total_used: aggregates.total_used,
            balance_remaining: aggregates.balance_remaining,
        }
    }
}
