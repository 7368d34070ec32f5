//! # Application Events
//!
//! Results of async tasks, sent back to the main thread over the app event
//! channel and applied by the event handler.

use crate::services::api::ApiError;
use crate::services::session::RestoreOutcome;
use shared::{AuthResponse, Expense, FileListing, UploadResponse, UserInfo};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
    Info,
}

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Startup session restore finished
    SessionRestored(RestoreOutcome),
    /// Login completed
    LoginResult(Result<AuthResponse, ApiError>),
    /// Signup completed
    SignupResult(Result<AuthResponse, ApiError>),
    /// Expense list fetched; `seq` is the reload id the request was issued
    /// with, so stale results can be dropped
    ExpensesLoaded {
        seq: u64,
        result: Result<Vec<Expense>, ApiError>,
    },
    /// Expense create/update completed
    ExpenseSaved(Result<Expense, ApiError>),
    /// Expense delete completed
    ExpenseDeleted {
        id: String,
        result: Result<(), ApiError>,
    },
    /// File listing fetched
    FilesLoaded(Result<FileListing, ApiError>),
    /// File upload completed
    FileUploaded(Result<UploadResponse, ApiError>),
    /// Profile fetched
    ProfileLoaded(Result<UserInfo, ApiError>),
    /// Profile update completed
    ProfileSaved(Result<UserInfo, ApiError>),
    /// Show a toast
    Notify(NotifyLevel, String),
}
