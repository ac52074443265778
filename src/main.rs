//! actlog server: the activity log behind the Songbird admin panel.
//!
//! Main entry point that loads configuration, opens the log store, and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use actlog_core::config::AppConfig;
use actlog_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("ACTLOG_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting actlog v{}", env!("CARGO_PKG_VERSION"));

    let state = actlog_api::build_state(config).await?;
    actlog_api::run_server(state).await?;

    tracing::info!("actlog stopped");
    Ok(())
}
