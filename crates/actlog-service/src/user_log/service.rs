//! User log service: the access gate in front of the log store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tracing::{info, warn};

use actlog_auth::{AccessDecision, AccessGate, LogOperation};
use actlog_core::error::AppError;
use actlog_core::result::AppResult;
use actlog_core::types::{PageRequest, PageResponse, UserLogId};
use actlog_database::LogStore;
use actlog_entity::user_log::{LogFilter, NewUserLog, UserLog};

use crate::context::RequestContext;

use super::gated::Gated;

/// Records activity and serves gated reads of the log.
#[derive(Debug, Clone)]
pub struct UserLogService {
    /// The log store.
    store: Arc<dyn LogStore>,
    /// Authorization policy.
    gate: AccessGate,
    /// Upper bound for a single store round trip.
    timeout: Duration,
}

impl UserLogService {
    /// Creates a new user log service.
    pub fn new(store: Arc<dyn LogStore>, gate: AccessGate, timeout: Duration) -> Self {
        Self {
            store,
            gate,
            timeout,
        }
    }

    /// Returns the per-operation timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Evaluate the gate for `ctx`, logging denials.
    pub fn authorize(
        &self,
        ctx: &RequestContext,
        operation: LogOperation,
        target: Option<UserLogId>,
    ) -> AccessDecision {
        let decision = self.gate.authorize(ctx.role, operation, target);
        if let AccessDecision::Deny(reason) = decision {
            warn!(
                username = %ctx.username,
                role = %ctx.role,
                operation = %operation,
                target = ?target.map(UserLogId::get),
                reason = %reason,
                "Access denied"
            );
        }
        decision
    }

    /// Record an entry. Recording is not gated.
    pub async fn record(&self, new: NewUserLog) -> AppResult<UserLogId> {
        let username = new.username.clone();
        let action = new.action.clone();
        let id = self.bounded(self.store.record(new)).await?;
        info!(%id, %username, %action, "Activity recorded");
        Ok(id)
    }

    /// List entries, most recent first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: &LogFilter,
        page: &PageRequest,
    ) -> AppResult<Gated<PageResponse<UserLog>>> {
        if let AccessDecision::Deny(reason) = self.authorize(ctx, LogOperation::List, None) {
            return Ok(Gated::Denied(reason));
        }
        let page = self.bounded(self.store.list(filter, page)).await?;
        Ok(Gated::Allowed(page))
    }

    /// Total number of entries, gated like `list`.
    pub async fn count(&self, ctx: &RequestContext) -> AppResult<Gated<u64>> {
        if let AccessDecision::Deny(reason) = self.authorize(ctx, LogOperation::List, None) {
            return Ok(Gated::Denied(reason));
        }
        let total = self.bounded(self.store.count()).await?;
        Ok(Gated::Allowed(total))
    }

    /// Show a single entry.
    pub async fn show(&self, ctx: &RequestContext, id: UserLogId) -> AppResult<Gated<UserLog>> {
        self.read_one(ctx, LogOperation::Show, id).await
    }

    /// Open a single entry in the edit view.
    ///
    /// Entries are immutable, so this is a gated read; nothing is written.
    pub async fn edit(&self, ctx: &RequestContext, id: UserLogId) -> AppResult<Gated<UserLog>> {
        self.read_one(ctx, LogOperation::Edit, id).await
    }

    /// Lazily stream every matching entry, most recent first.
    ///
    /// Each pull from the store is bounded by the service timeout; a pull
    /// that times out yields one `Storage` error and ends the stream.
    pub fn export<'a>(
        &'a self,
        ctx: &RequestContext,
        filter: &'a LogFilter,
    ) -> Gated<BoxStream<'a, AppResult<UserLog>>> {
        if let AccessDecision::Deny(reason) = self.authorize(ctx, LogOperation::List, None) {
            return Gated::Denied(reason);
        }

        let timeout = self.timeout;
        let bounded = stream::unfold(Some(self.store.stream(filter)), move |state| async move {
            let mut inner = state?;
            match tokio::time::timeout(timeout, inner.next()).await {
                Ok(Some(item)) => Some((item, Some(inner))),
                Ok(None) => None,
                Err(_) => Some((Err(timed_out(timeout)), None)),
            }
        });
        Gated::Allowed(bounded.boxed())
    }

    /// Check that the store is reachable within the timeout.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.bounded(self.store.health_check()).await
    }

    async fn read_one(
        &self,
        ctx: &RequestContext,
        operation: LogOperation,
        id: UserLogId,
    ) -> AppResult<Gated<UserLog>> {
        if let AccessDecision::Deny(reason) = self.authorize(ctx, operation, Some(id)) {
            return Ok(Gated::Denied(reason));
        }
        let entry = self.bounded(self.store.get(id)).await?;
        Ok(Gated::Allowed(entry))
    }

    async fn bounded<T>(&self, fut: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| timed_out(self.timeout))?
    }
}

fn timed_out(timeout: Duration) -> AppError {
    AppError::storage(format!(
        "Log store did not respond within {}ms",
        timeout.as_millis()
    ))
}
