//! HTTP request handlers for the off-day ledger engine API.
//!
//! This module contains the handler functions for all ledger endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{
    add_personnel, create_grant, create_usage, delete_grants, delete_personnel, edit_grant,
    edit_usage, get_aggregates, list_available_grants, undo_usage, DeletePersonnelRequest,
};
use crate::error::LedgerError;

use super::request::{
    AddPersonnelBody, CreateGrantBody, CreateUsageBody, DeleteGrantsBody, DeletePersonnelQuery,
    EditGrantBody, EditUsageBody, PersonnelQuery,
};
use super::response::{
    AggregatesResponse, ApiError, ApiErrorResponse, GrantOptionResponse, MutationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/grants",
            post(create_grant_handler).delete(delete_grants_handler),
        )
        .route("/grants/available", get(list_grants_handler))
        .route("/grants/:id", axum::routing::put(edit_grant_handler))
        .route("/usages", post(create_usage_handler))
        .route(
            "/usages/:use_id",
            axum::routing::put(edit_usage_handler).delete(undo_usage_handler),
        )
        .route("/aggregates", get(aggregates_handler))
        .route(
            "/personnel",
            post(add_personnel_handler).get(list_personnel_handler),
        )
        .route(
            "/personnel/:name",
            axum::routing::delete(delete_personnel_handler),
        )
        .with_state(state)
}

/// Serializes a success body with an explicit JSON content type.
fn ok_json<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Logs and serializes an engine failure.
fn err_json(correlation_id: Uuid, error: LedgerError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Ledger operation failed"
    );
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Unpacks a JSON body, turning axum rejections into structured errors.
fn unpack<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Handler for POST /grants.
async fn create_grant_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateGrantBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grant creation");

    let body = match unpack(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let mut ledger = state.ledger();
    match create_grant(&mut ledger, body.into()) {
        Ok(created) => {
            info!(
                correlation_id = %correlation_id,
                id = %created.id,
                "Grant created"
            );
            ok_json(MutationResponse::with_id(created.id, created.message))
        }
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for GET /grants/available.
async fn list_grants_handler(
    State(state): State<AppState>,
    Query(query): Query<PersonnelQuery>,
) -> Response {
    let ledger = state.ledger();
    let options: Vec<GrantOptionResponse> = list_available_grants(&ledger, &query.personnel)
        .into_iter()
        .map(Into::into)
        .collect();
    ok_json(options)
}

/// Handler for PUT /grants/:id.
async fn edit_grant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EditGrantBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, id = %id, "Processing grant edit");

    let body = match unpack(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let mut ledger = state.ledger();
    match edit_grant(&mut ledger, body.into_request(id)) {
        Ok(edited) => ok_json(MutationResponse::message(edited.message)),
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for DELETE /grants.
async fn delete_grants_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeleteGrantsBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grant deletion");

    let body = match unpack(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let mut ledger = state.ledger();
    match delete_grants(&mut ledger, body.into()) {
        Ok(deleted) => {
            info!(
                correlation_id = %correlation_id,
                deleted = deleted.deleted,
                "Grants deleted"
            );
            ok_json(MutationResponse::message(deleted.message))
        }
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for POST /usages.
async fn create_usage_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUsageBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing usage creation");

    let body = match unpack(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let mut ledger = state.ledger();
    match create_usage(&mut ledger, body.into()) {
        Ok(created) => {
            info!(
                correlation_id = %correlation_id,
                use_id = %created.use_id,
                "Usage recorded"
            );
            ok_json(MutationResponse::with_id(created.use_id, created.message))
        }
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for PUT /usages/:use_id.
async fn edit_usage_handler(
    State(state): State<AppState>,
    Path(use_id): Path<String>,
    payload: Result<Json<EditUsageBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, use_id = %use_id, "Processing usage edit");

    let body = match unpack(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let mut ledger = state.ledger();
    match edit_usage(&mut ledger, body.into_request(use_id)) {
        Ok(edited) => ok_json(MutationResponse::message(edited.message)),
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for DELETE /usages/:use_id.
async fn undo_usage_handler(
    State(state): State<AppState>,
    Path(use_id): Path<String>,
    Query(query): Query<PersonnelQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, use_id = %use_id, "Processing usage undo");

    let mut ledger = state.ledger();
    match undo_usage(&mut ledger, &query.personnel, &use_id) {
        Ok(undone) => ok_json(MutationResponse::message(undone.message)),
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for GET /aggregates.
async fn aggregates_handler(
    State(state): State<AppState>,
    Query(query): Query<PersonnelQuery>,
) -> Response {
    let ledger = state.ledger();
    let aggregates: AggregatesResponse = get_aggregates(&ledger, &query.personnel).into();
    ok_json(aggregates)
}

/// Handler for GET /personnel.
async fn list_personnel_handler(State(state): State<AppState>) -> Response {
    let ledger = state.ledger();
    ok_json(ledger.personnel_names().to_vec())
}

/// Handler for POST /personnel.
async fn add_personnel_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddPersonnelBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing personnel addition");

    let body = match unpack(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let mut ledger = state.ledger();
    match add_personnel(&mut ledger, &body.name) {
        Ok(changed) => ok_json(MutationResponse::message(changed.message)),
        Err(error) => err_json(correlation_id, error),
    }
}

/// Handler for DELETE /personnel/:name.
async fn delete_personnel_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<DeletePersonnelQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, name = %name, "Processing personnel deletion");

    let mut ledger = state.ledger();
    let request = DeletePersonnelRequest {
        name,
        delete_data: query.delete_data,
    };
    match delete_personnel(&mut ledger, request) {
        Ok(changed) => ok_json(MutationResponse::message(changed.message)),
        Err(error) => err_json(correlation_id, error),
    }
}
