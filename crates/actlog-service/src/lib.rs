//! # actlog-service
//!
//! Service layer for actlog. [`UserLogService`] evaluates the access gate
//! before every read and bounds every store round trip with a timeout.
//!
//! Services follow constructor injection: the store is provided at
//! construction time as an `Arc<dyn LogStore>`.

pub mod context;
pub mod user_log;

pub use context::RequestContext;
pub use user_log::{Gated, UserLogService};
