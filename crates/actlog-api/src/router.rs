//! Route definitions.
//!
//! Admin pages live under `/admin` and pass through activity tracking. The
//! JSON API is mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(log_routes())
        .merge(admin_api_routes())
        .merge(health_routes());

    let admin_pages = admin_page_routes().layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::activity::track_activity,
    ));

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(admin_pages)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// HTML admin pages
fn admin_page_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(handlers::admin::dashboard::dashboard))
        .route(
            "/admin/app/userlog/list",
            get(handlers::admin::user_log::list),
        )
        .route(
            "/admin/app/userlog/{id}/show",
            get(handlers::admin::user_log::show),
        )
        .route(
            "/admin/app/userlog/{id}/edit",
            get(handlers::admin::user_log::edit),
        )
}

/// Recording endpoint for any identified caller
fn log_routes() -> Router<AppState> {
    Router::new().route("/logs", post(handlers::user_log::record_log))
}

/// Gated JSON reads
fn admin_api_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/logs", get(handlers::user_log::list_logs))
        .route("/admin/logs/export", get(handlers::user_log::export_logs))
        .route("/admin/logs/{id}", get(handlers::user_log::get_log))
}

/// Health check endpoints (no identity required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
