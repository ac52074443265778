//! Role-based access control for log operations.

pub mod gate;
mod policies;

pub use gate::{AccessDecision, AccessGate, DenyReason};
pub use policies::LogOperation;
