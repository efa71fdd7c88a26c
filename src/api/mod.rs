//! HTTP API module for the off-day ledger engine.
//!
//! This module provides the REST endpoints through which the surrounding
//! application (dialog forms in the original tracker) drives the engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AddPersonnelBody, CreateGrantBody, CreateUsageBody, DeleteGrantsBody, EditGrantBody,
    EditUsageBody,
};
pub use response::ApiError;
pub use state::AppState;
