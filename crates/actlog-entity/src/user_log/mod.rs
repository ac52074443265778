//! User activity log entities.

pub mod filter;
pub mod model;

pub use filter::LogFilter;
pub use model::{MAX_ACTION_LEN, NewUserLog, UserLog};
