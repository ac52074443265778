//! # actlog-database
//!
//! The [`LogStore`] trait and its two backends: PostgreSQL through `sqlx`
//! and a process-local store used in development and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryLogStore;
pub use repositories::UserLogRepository;
pub use store::{LogStore, open_store};
