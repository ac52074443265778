//! PostgreSQL repository implementations.

pub mod user_log;

pub use user_log::UserLogRepository;
