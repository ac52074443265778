//! Core type definitions used across the actlog workspace.

pub mod id;
pub mod pagination;

pub use id::UserLogId;
pub use pagination::{PageRequest, PageResponse};
