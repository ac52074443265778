//! Gated access to the activity log.

pub mod gated;
pub mod service;

pub use gated::Gated;
pub use service::UserLogService;
