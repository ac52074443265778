//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{AuthUser, resolve_caller};
pub use pagination::ListParams;
