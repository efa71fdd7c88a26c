//! Request types for the off-day ledger engine API.
//!
//! This module defines the JSON request structures for the ledger
//! endpoints. The bodies mirror the dialog forms in the original tracker:
//! every field arrives as raw text and the engine owns all parsing.

use serde::{Deserialize, Serialize};

use crate::engine::{
    CreateGrantRequest, CreateUsageRequest, DeleteGrantsRequest, EditGrantRequest,
    EditUsageRequest,
};

/// Request body for `POST /grants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGrantBody {
    /// Owner of the credit.
    pub personnel: String,
    /// Grant date as `YYYY-MM-DD`; blank defaults to today.
    #[serde(default)]
    pub granted_date: String,
    /// FULL or HALF.
    pub duration_type: String,
    /// OPS or OTHERS.
    pub reason_type: String,
    /// For OPS: the Saturday/Sunday duty date as `YYYY-MM-DD`.
    #[serde(default)]
    pub weekend_ops_date: String,
    /// For OTHERS: free-text reason details.
    #[serde(default)]
    pub other_details: String,
    /// Who provided the credit.
    #[serde(default)]
    pub provided_by: String,
}

/// Request body for `PUT /grants/:id`.
///
/// A full replacement of the grant's editable fields; the id comes from
/// the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditGrantBody {
    /// Owner of the grant.
    pub personnel: String,
    /// New grant date as `YYYY-MM-DD`; blank defaults to today.
    #[serde(default)]
    pub granted_date: String,
    /// FULL or HALF.
    pub duration_type: String,
    /// OPS or OTHERS.
    pub reason_type: String,
    /// For OPS: the Saturday/Sunday duty date.
    #[serde(default)]
    pub weekend_ops_date: String,
    /// For OTHERS: free-text reason details.
    #[serde(default)]
    pub other_details: String,
    /// Who provided the credit.
    #[serde(default)]
    pub provided_by: String,
}

/// Request body for `DELETE /grants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteGrantsBody {
    /// Owner of the grants.
    pub personnel: String,
    /// The grant ids to delete.
    #[serde(default)]
    pub ids: Vec<String>,
}

/// Request body for `POST /usages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUsageBody {
    /// Owner of the usage.
    pub personnel: String,
    /// Intended date as `YYYY-MM-DD`; blank defaults to today.
    #[serde(default)]
    pub intended_date: String,
    /// FULL, AM, or PM.
    pub session: String,
    /// Candidate grant ids, in preferred draw order.
    #[serde(default)]
    pub selected_ids: Vec<String>,
    /// Optional free-text comments.
    #[serde(default)]
    pub comments: String,
}

/// Request body for `PUT /usages/:use_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditUsageBody {
    /// Owner of the usage.
    pub personnel: String,
    /// New intended date as `YYYY-MM-DD`; blank defaults to today.
    #[serde(default)]
    pub intended_date: String,
    /// New session: FULL, AM, or PM.
    pub session: String,
    /// New comments.
    #[serde(default)]
    pub comments: String,
    /// Extra grant ids to draw from when the new session needs more.
    #[serde(default)]
    pub additional_ids: Vec<String>,
}

/// Request body for `POST /personnel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPersonnelBody {
    /// The name to register.
    pub name: String,
}

/// Query string naming the personnel for read-side and delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonnelQuery {
    /// The personnel to operate on.
    #[serde(default)]
    pub personnel: String,
}

/// Query string for `DELETE /personnel/:name`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletePersonnelQuery {
    /// Also delete all records owned by the name.
    #[serde(default)]
    pub delete_data: bool,
}

impl From<CreateGrantBody> for CreateGrantRequest {
    fn from(body: CreateGrantBody) -> Self {
        CreateGrantRequest {
            personnel: body.personnel,
            granted_date: body.granted_date,
            duration_type: body.duration_type,
            reason_type: body.reason_type,
            weekend_ops_date: body.weekend_ops_date,
            other_details: body.other_details,
            provided_by: body.provided_by,
        }
    }
}

impl EditGrantBody {
    /// Builds the engine request for the grant named by the path.
    pub fn into_request(self, id: String) -> EditGrantRequest {
        EditGrantRequest {
            personnel: self.personnel,
            id,
            granted_date: self.granted_date,
            duration_type: self.duration_type,
            reason_type: self.reason_type,
            weekend_ops_date: self.weekend_ops_date,
            other_details: self.other_details,
            provided_by: self.provided_by,
        }
    }
}

impl From<DeleteGrantsBody> for DeleteGrantsRequest {
    fn from(body: DeleteGrantsBody) -> Self {
        DeleteGrantsRequest {
            personnel: body.personnel,
            ids: body.ids,
        }
    }
}

impl From<CreateUsageBody> for CreateUsageRequest {
    fn from(body: CreateUsageBody) -> Self {
        CreateUsageRequest {
            personnel: body.personnel,
            intended_date: body.intended_date,
            session: body.session,
            selected_ids: body.selected_ids,
            comments: body.comments,
        }
    }
}

impl EditUsageBody {
    /// Builds the engine request for the usage named by the path.
    pub fn into_request(self, use_id: String) -> EditUsageRequest {
        EditUsageRequest {
            personnel: self.personnel,
            use_id,
            intended_date: self.intended_date,
            session: self.session,
            comments: self.comments,
            additional_ids: self.additional_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_grant_body_with_defaults() {
        let json = r#"{
            "personnel": "Alice",
            "duration_type": "FULL",
            "reason_type": "OTHERS"
        }"#;

        let body: CreateGrantBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.personnel, "Alice");
        assert_eq!(body.granted_date, "");
        assert_eq!(body.provided_by, "");
    }

    #[test]
    fn test_deserialize_create_usage_body() {
        let json = r#"{
            "personnel": "Alice",
            "intended_date": "2026-03-02",
            "session": "AM",
            "selected_ids": ["G-0001", "G-0002"],
            "comments": "medical"
        }"#;

        let body: CreateUsageBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.session, "AM");
        assert_eq!(body.selected_ids.len(), 2);
    }

    #[test]
    fn test_edit_usage_body_carries_path_id() {
        let json = r#"{
            "personnel": "Alice",
            "session": "FULL",
            "additional_ids": ["G-0003"]
        }"#;

        let body: EditUsageBody = serde_json::from_str(json).unwrap();
        let request = body.into_request("U-0002".to_string());
        assert_eq!(request.use_id, "U-0002");
        assert_eq!(request.additional_ids, vec!["G-0003".to_string()]);
    }

    #[test]
    fn test_missing_personnel_fails_deserialization() {
        let json = r#"{"session": "AM"}"#;
        let result: Result<CreateUsageBody, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
