//! # Common Error Types
//!
//! Errors raised by the application itself, as opposed to
//! [`crate::services::api::ApiError`] which normalizes failures at the HTTP
//! boundary. Validation failures never reach either type; they are produced
//! before any side effect and rendered inline (see
//! [`crate::utils::validation`]).

use thiserror::Error;

/// Application-internal error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local persistence failures (the key-value store backing the session).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Log file setup failures at startup.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
