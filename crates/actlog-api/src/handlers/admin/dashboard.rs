//! Admin dashboard handler.

use axum::extract::State;
use axum::response::Html;

use actlog_service::Gated;

use crate::error::{ApiError, HtmlError};
use crate::extractors::AuthUser;
use crate::state::AppState;
use crate::views;

/// GET /admin/dashboard
///
/// Every identified caller may open the dashboard; only administrators see
/// the admin box and the entry count.
pub async fn dashboard(
    State(state): State<AppState>,
    caller: Result<AuthUser, ApiError>,
) -> Result<Html<String>, HtmlError> {
    let AuthUser(ctx) = caller?;

    let total = if ctx.is_admin() {
        match state.log_service.count(&ctx).await? {
            Gated::Allowed(total) => Some(total),
            Gated::Denied(_) => None,
        }
    } else {
        None
    };

    Ok(Html(views::dashboard::dashboard_page(&ctx, total)))
}
