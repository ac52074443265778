//! Process-local log store used for development and tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;
use tracing::debug;

use actlog_core::error::AppError;
use actlog_core::result::AppResult;
use actlog_core::types::{PageRequest, PageResponse, UserLogId};
use actlog_entity::user_log::{LogFilter, NewUserLog, UserLog};

use crate::store::LogStore;

/// In-memory log store keyed by id.
///
/// Ids come from an atomic counter starting at `1`. `created` is stamped
/// while the write lock is held, so it never goes backwards relative to id
/// order. Reads clone a snapshot under the read lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    entries: Arc<RwLock<BTreeMap<UserLogId, UserLog>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryLogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matching entries, most recent first.
    async fn snapshot(&self, filter: &LogFilter) -> Vec<UserLog> {
        let entries = self.entries.read().await;
        let mut matching: Vec<UserLog> = entries
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created()
                .cmp(&a.created())
                .then_with(|| b.id().cmp(&a.id()))
        });
        matching
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn record(&self, new: NewUserLog) -> AppResult<UserLogId> {
        new.validate()?;

        let mut entries = self.entries.write().await;
        let id = UserLogId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let entry = UserLog::from_draft(id, new, Utc::now())?;
        debug!(%id, username = entry.username(), action = entry.action(), "User log recorded");
        entries.insert(id, entry);
        Ok(id)
    }

    async fn get(&self, id: UserLogId) -> AppResult<UserLog> {
        self.entries
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User log {id} not found")))
    }

    async fn list(
        &self,
        filter: &LogFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserLog>> {
        let matching = self.snapshot(filter).await;
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    fn stream<'a>(&'a self, filter: &'a LogFilter) -> BoxStream<'a, AppResult<UserLog>> {
        stream::once(self.snapshot(filter))
            .flat_map(|entries| stream::iter(entries.into_iter().map(Ok)))
            .boxed()
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.entries.read().await.len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
