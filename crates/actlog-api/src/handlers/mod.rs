//! HTTP request handlers.

pub mod admin;
pub mod health;
pub mod user_log;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;

use actlog_auth::{AccessDecision, LogOperation};
use actlog_core::error::AppError;
use actlog_core::result::AppResult;
use actlog_core::types::UserLogId;
use actlog_entity::user_log::UserLog;
use actlog_service::{Gated, RequestContext};

use crate::extractors::ListParams;
use crate::state::AppState;

/// Resolve list/export parameters behind the gate.
///
/// A malformed query string is only reported to callers allowed to list;
/// everyone else gets the same denial as for a well-formed one.
pub(crate) fn gated_list_params(
    state: &AppState,
    ctx: &RequestContext,
    query: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Gated<ListParams>> {
    if let AccessDecision::Deny(reason) = state.log_service.authorize(ctx, LogOperation::List, None)
    {
        return Ok(Gated::Denied(reason));
    }
    query
        .map(|Query(params)| Gated::Allowed(params))
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

/// Load one entry for `operation` from a raw path segment.
///
/// An id that does not parse is still gated first, so a non-admin gets the
/// same denial for `/abc/show` as for `/1/show`.
pub(crate) async fn gated_entry(
    state: &AppState,
    ctx: &RequestContext,
    operation: LogOperation,
    raw_id: &str,
) -> AppResult<Gated<UserLog>> {
    let Ok(id) = raw_id.parse::<UserLogId>() else {
        if let AccessDecision::Deny(reason) = state.log_service.authorize(ctx, operation, None) {
            return Ok(Gated::Denied(reason));
        }
        return Err(AppError::not_found(format!("User log '{raw_id}' not found")));
    };

    match operation {
        LogOperation::Edit => state.log_service.edit(ctx, id).await,
        LogOperation::Show | LogOperation::List => state.log_service.show(ctx, id).await,
    }
}
