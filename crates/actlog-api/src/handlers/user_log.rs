//! JSON user log handlers: record, list, show, and NDJSON export.

use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures::StreamExt;
use futures::stream;
use tokio::sync::mpsc;

use actlog_auth::LogOperation;
use actlog_core::error::AppError;
use actlog_service::Gated;

use crate::dto::{ApiResponse, RecordLogRequest, RecordedResponse};
use crate::error::{ApiDenied, ApiError};
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

use super::{gated_entry, gated_list_params};

/// Lines buffered between the store and a slow client.
const EXPORT_BUFFER: usize = 64;

/// POST /api/logs
pub async fn record_log(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<RecordLogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = req.into_draft(&ctx.username)?;
    let id = state.log_service.record(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RecordedResponse { id })),
    ))
}

/// GET /api/admin/logs
pub async fn list_logs(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = match gated_list_params(&state, &ctx, query)? {
        Gated::Allowed(params) => params,
        Gated::Denied(reason) => return Ok(ApiDenied(reason).into_response()),
    };
    let gated = state
        .log_service
        .list(&ctx, &params.filter(), &params.page_request())
        .await?;
    Ok(match gated {
        Gated::Allowed(page) => Json(ApiResponse::ok(page)).into_response(),
        Gated::Denied(reason) => ApiDenied(reason).into_response(),
    })
}

/// GET /api/admin/logs/{id}
pub async fn get_log(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(
        match gated_entry(&state, &ctx, LogOperation::Show, &id).await? {
            Gated::Allowed(entry) => Json(ApiResponse::ok(entry)).into_response(),
            Gated::Denied(reason) => ApiDenied(reason).into_response(),
        },
    )
}

/// GET /api/admin/logs/export
///
/// Streams matching entries as newline-delimited JSON, most recent first.
/// A store failure after the first line aborts the body.
pub async fn export_logs(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = match gated_list_params(&state, &ctx, query)? {
        Gated::Allowed(params) => params,
        Gated::Denied(reason) => return Ok(ApiDenied(reason).into_response()),
    };

    let filter = params.filter();
    let service = Arc::clone(&state.log_service);
    let (tx, rx) = mpsc::channel::<Result<Bytes, AppError>>(EXPORT_BUFFER);

    tokio::spawn(async move {
        let Gated::Allowed(mut entries) = service.export(&ctx, &filter) else {
            return;
        };
        while let Some(item) = entries.next().await {
            let line = item.and_then(|entry| {
                let mut line = serde_json::to_vec(&entry)?;
                line.push(b'\n');
                Ok(Bytes::from(line))
            });
            let failed = line.is_err();
            if let Err(e) = &line {
                tracing::error!(error = %e, username = %ctx.username, "User log export aborted");
            }
            if tx.send(line).await.is_err() || failed {
                break;
            }
        }
    });

    let body = Body::from_stream(stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|line| (line, rx))
    }));

    Ok(([(header::CONTENT_TYPE, "application/x-ndjson")], body).into_response())
}
