//! # actlog-api
//!
//! HTTP layer for actlog built on Axum.
//!
//! Serves the admin pages (dashboard and the user log list/show/edit
//! views), a small JSON API, caller identity extraction, activity tracking
//! middleware, and the mapping from domain errors and denials to responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
