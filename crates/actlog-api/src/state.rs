//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use actlog_auth::AccessGate;
use actlog_core::config::AppConfig;
use actlog_database::LogStore;
use actlog_service::UserLogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Gated access to the activity log
    pub log_service: Arc<UserLogService>,
    /// When the process started serving
    pub started_at: Instant,
}

impl AppState {
    /// Wire the state around an already opened store.
    pub fn new(config: AppConfig, store: Arc<dyn LogStore>) -> Self {
        let log_service = UserLogService::new(
            store,
            AccessGate::new(),
            config.database.operation_timeout(),
        );
        Self {
            config: Arc::new(config),
            log_service: Arc::new(log_service),
            started_at: Instant::now(),
        }
    }
}
