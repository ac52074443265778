//! The log store abstraction shared by every backend.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use tracing::info;

use actlog_core::config::{DatabaseConfig, StoreBackend};
use actlog_core::result::AppResult;
use actlog_core::types::{PageRequest, PageResponse, UserLogId};
use actlog_entity::user_log::{LogFilter, NewUserLog, UserLog};

use crate::connection::DatabasePool;
use crate::memory::MemoryLogStore;
use crate::migration::run_migrations;
use crate::repositories::UserLogRepository;

/// Append-only keeper of [`UserLog`] entries.
///
/// Implementations own the durable collection exclusively. Entries are
/// created by [`record`](LogStore::record) and never updated afterwards.
/// Every listing is ordered by `created` descending, ties broken by `id`
/// descending.
#[async_trait]
pub trait LogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Validate and persist a new entry, returning its fresh id.
    async fn record(&self, new: NewUserLog) -> AppResult<UserLogId>;

    /// Fetch a single entry. Fails with `NotFound` for unknown ids.
    async fn get(&self, id: UserLogId) -> AppResult<UserLog>;

    /// Fetch one page of entries matching `filter`, most recent first.
    async fn list(
        &self,
        filter: &LogFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserLog>>;

    /// Lazily yield every entry matching `filter`, most recent first.
    ///
    /// The stream is finite and cannot be restarted.
    fn stream<'a>(&'a self, filter: &'a LogFilter) -> BoxStream<'a, AppResult<UserLog>>;

    /// Total number of stored entries.
    async fn count(&self) -> AppResult<u64>;

    /// Check that the durable medium is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Open the store selected by configuration.
///
/// For PostgreSQL this connects the pool and, unless disabled, applies the
/// bundled migrations.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn LogStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory log store");
            Ok(Arc::new(MemoryLogStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                run_migrations(pool.pool()).await?;
            }
            Ok(Arc::new(UserLogRepository::new(pool.into_pool())))
        }
    }
}
