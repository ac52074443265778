//! PostgreSQL-backed user log repository.

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use sqlx::PgPool;
use tracing::debug;

use actlog_core::error::{AppError, ErrorKind};
use actlog_core::result::AppResult;
use actlog_core::types::{PageRequest, PageResponse, UserLogId};
use actlog_entity::user_log::{LogFilter, NewUserLog, UserLog};

use crate::store::LogStore;

/// Repository for the `user_log` table.
#[derive(Debug, Clone)]
pub struct UserLogRepository {
    pool: PgPool,
}

impl UserLogRepository {
    /// Create a new user log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `WHERE` clause for the supplied filter, with placeholders numbered from `$1`.
fn where_clause(filter: &LogFilter) -> &'static str {
    match (filter.username.is_some(), filter.action.is_some()) {
        (false, false) => "",
        (true, false) => "WHERE username = $1",
        (false, true) => "WHERE action = $1",
        (true, true) => "WHERE username = $1 AND action = $2",
    }
}

fn bound_params(filter: &LogFilter) -> u32 {
    filter.username.is_some() as u32 + filter.action.is_some() as u32
}

fn stream_sql(filter: &LogFilter) -> &'static str {
    match (filter.username.is_some(), filter.action.is_some()) {
        (false, false) => "SELECT * FROM user_log ORDER BY created DESC, id DESC",
        (true, false) => {
            "SELECT * FROM user_log WHERE username = $1 ORDER BY created DESC, id DESC"
        }
        (false, true) => "SELECT * FROM user_log WHERE action = $1 ORDER BY created DESC, id DESC",
        (true, true) => {
            "SELECT * FROM user_log WHERE username = $1 AND action = $2 \
             ORDER BY created DESC, id DESC"
        }
    }
}

#[async_trait]
impl LogStore for UserLogRepository {
    async fn record(&self, new: NewUserLog) -> AppResult<UserLogId> {
        new.validate()?;

        let id: UserLogId = sqlx::query_scalar(
            "INSERT INTO user_log (username, current_url, referrer, action, data) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&new.username)
        .bind(&new.current_url)
        .bind(&new.referrer)
        .bind(&new.action)
        .bind(&new.data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to record user log", e))?;

        debug!(%id, username = %new.username, action = %new.action, "User log recorded");
        Ok(id)
    }

    async fn get(&self, id: UserLogId) -> AppResult<UserLog> {
        sqlx::query_as::<_, UserLog>("SELECT * FROM user_log WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to find user log", e))?
            .ok_or_else(|| AppError::not_found(format!("User log {id} not found")))
    }

    async fn list(
        &self,
        filter: &LogFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserLog>> {
        let where_clause = where_clause(filter);
        let param_idx = bound_params(filter) + 1;

        let count_sql = format!("SELECT COUNT(*) FROM user_log {where_clause}");
        let select_sql = format!(
            "SELECT * FROM user_log {where_clause} ORDER BY created DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, UserLog>(&select_sql);

        if let Some(username) = &filter.username {
            count_query = count_query.bind(username);
            select_query = select_query.bind(username);
        }
        if let Some(action) = &filter.action {
            count_query = count_query.bind(action);
            select_query = select_query.bind(action);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to count user logs", e)
        })?;

        let entries = select_query
            .bind(sql_i64(page.limit()))
            .bind(sql_i64(page.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to list user logs", e))?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    fn stream<'a>(&'a self, filter: &'a LogFilter) -> BoxStream<'a, AppResult<UserLog>> {
        let mut query = sqlx::query_as::<_, UserLog>(stream_sql(filter));
        if let Some(username) = filter.username.as_deref() {
            query = query.bind(username);
        }
        if let Some(action) = filter.action.as_deref() {
            query = query.bind(action);
        }

        query
            .fetch(&self.pool)
            .map(|row| {
                row.map_err(|e| {
                    AppError::with_source(ErrorKind::Storage, "Failed to stream user logs", e)
                })
            })
            .boxed()
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_log")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to count user logs", e)
            })?;
        Ok(count as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Health check failed", e))
    }
}

/// Convert a `LIMIT`/`OFFSET` value for binding, saturating at `i64::MAX`.
fn sql_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
