//! Server-rendered admin pages.

pub mod dashboard;
pub mod user_log;
