//! Ledger allocation engine for discretionary off-day credits.
//!
//! This crate tracks grants of off-time per personnel, allocates usage events
//! against those grants, keeps the granted and used ledgers consistent, and
//! records every mutation in an append-only audit log.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod duration;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
