//! Activity tracking: records a `page_view` entry for every identified
//! request that passes through the admin pages.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use actlog_entity::user_log::NewUserLog;

use crate::extractors::resolve_caller;
use crate::state::AppState;

/// Action label for entries written by this middleware.
pub const PAGE_VIEW: &str = "page_view";

/// Record the page view after the handler has produced its response.
///
/// Anonymous requests are not recorded. A failed write is logged and never
/// changes the response.
pub async fn track_activity(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.config.activity.track_page_views {
        return next.run(request).await;
    }

    let caller = resolve_caller(request.headers(), &state.config.auth).ok();
    let current_url = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let referrer = request
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from);
    let method = request.method().clone();

    let response = next.run(request).await;

    let Some(ctx) = caller else {
        return response;
    };

    let data = serde_json::json!({
        "method": method.as_str(),
        "status": response.status().as_u16(),
    })
    .to_string();
    let mut draft = NewUserLog::new(ctx.username, current_url, PAGE_VIEW).with_data(data);
    if let Some(referrer) = referrer {
        draft = draft.with_referrer(referrer);
    }

    if let Err(e) = state.log_service.record(draft).await {
        tracing::warn!(error = %e, "Failed to record page view");
    }

    response
}
