//! File-based logging initialization
//!
//! Logs go to `logs/dashboard.log` with daily rotation and non-blocking
//! writes so logging never stalls a frame. The filter comes from `RUST_LOG`
//! when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::error::{AppError, Result};

const LOG_DIR: &str = "logs";

/// Initialize the logging system.
pub fn init() -> Result<()> {
    std::fs::create_dir_all(LOG_DIR).map_err(|e| AppError::Logging(e.to_string()))?;

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "dashboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dashboard=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    // The guard must outlive the process for the non-blocking writer to keep
    // flushing.
    std::mem::forget(guard);

    tracing::info!(log_dir = LOG_DIR, "Logging initialized");
    Ok(())
}
