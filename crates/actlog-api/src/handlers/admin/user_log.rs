//! User log admin pages: list, show, and edit.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};

use actlog_auth::LogOperation;
use actlog_service::Gated;

use crate::error::{ApiError, HtmlDenied, HtmlError};
use crate::extractors::{AuthUser, ListParams};
use crate::handlers::{gated_entry, gated_list_params};
use crate::state::AppState;
use crate::views::user_log as pages;

/// GET /admin/app/userlog/list
pub async fn list(
    State(state): State<AppState>,
    caller: Result<AuthUser, ApiError>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, HtmlError> {
    let AuthUser(ctx) = caller?;
    let params = match gated_list_params(&state, &ctx, query)? {
        Gated::Allowed(params) => params,
        Gated::Denied(reason) => return Ok(HtmlDenied(reason).into_response()),
    };
    let filter = params.filter();

    Ok(
        match state
            .log_service
            .list(&ctx, &filter, &params.page_request())
            .await?
        {
            Gated::Allowed(page) => Html(pages::list_page(&ctx, &page, &filter)).into_response(),
            Gated::Denied(reason) => HtmlDenied(reason).into_response(),
        },
    )
}

/// GET /admin/app/userlog/{id}/show
pub async fn show(
    State(state): State<AppState>,
    caller: Result<AuthUser, ApiError>,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let AuthUser(ctx) = caller?;

    Ok(
        match gated_entry(&state, &ctx, LogOperation::Show, &id).await? {
            Gated::Allowed(entry) => Html(pages::show_page(&ctx, &entry)).into_response(),
            Gated::Denied(reason) => HtmlDenied(reason).into_response(),
        },
    )
}

/// GET /admin/app/userlog/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    caller: Result<AuthUser, ApiError>,
    Path(id): Path<String>,
) -> Result<Response, HtmlError> {
    let AuthUser(ctx) = caller?;

    Ok(
        match gated_entry(&state, &ctx, LogOperation::Edit, &id).await? {
            Gated::Allowed(entry) => Html(pages::edit_page(&ctx, &entry)).into_response(),
            Gated::Denied(reason) => HtmlDenied(reason).into_response(),
        },
    )
}
