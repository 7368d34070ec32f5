//! # Service Traits
//!
//! Trait for dependency injection, enabling better testability and
//! modularity. Screens and tasks only ever see `Arc<dyn ApiService>`; the
//! concrete [`crate::services::api::ApiClient`] implements it in production
//! and tests substitute an in-memory fake.

use async_trait::async_trait;

use crate::services::api::ApiError;
use shared::{
    AuthResponse, Expense, ExpensePayload, FileListing, LoginRequest, ProfileUpdate,
    SignupRequest, UploadResponse, UserInfo,
};

/// Every backend operation the dashboard performs.
///
/// One method per endpoint; all of them are single-attempt calls (no retry,
/// no client-side timeout) whose failures are normalized into [`ApiError`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new account
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError>;

    /// Authenticate with email and password
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Fetch the current user. Optional server-side; callers tolerate 404.
    async fn get_me(&self) -> Result<UserInfo, ApiError>;

    /// Read the caller's profile
    async fn get_profile(&self) -> Result<UserInfo, ApiError>;

    /// Update the caller's profile
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserInfo, ApiError>;

    /// List expenses within the last `days` days
    async fn list_expenses(&self, days: u32) -> Result<Vec<Expense>, ApiError>;

    /// Fetch a single expense by id
    async fn get_expense(&self, id: &str) -> Result<Expense, ApiError>;

    /// Create a new expense
    async fn create_expense(&self, payload: ExpensePayload) -> Result<Expense, ApiError>;

    /// Update an existing expense
    async fn update_expense(&self, id: &str, payload: ExpensePayload) -> Result<Expense, ApiError>;

    /// Delete an expense
    async fn delete_expense(&self, id: &str) -> Result<(), ApiError>;

    /// Upload a file to the object store (multipart, not JSON)
    async fn upload_file(&self, filename: String, bytes: Vec<u8>) -> Result<UploadResponse, ApiError>;

    /// List stored files
    async fn list_files(&self) -> Result<FileListing, ApiError>;

    /// URL for a static download of a stored object
    fn download_url(&self, key: &str) -> String;
}
