//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::core::service::ApiService;
use crate::services::storage::{KeyValueStorage, AUTH_TOKEN_KEY};
use shared::{ApiEnvelope, ApiErrorBody};

/// Default base URL for the backend API server, overridable with the
/// `EXPENSE_API_URL` environment variable.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Shorthand for body-less requests.
pub(crate) const NO_BODY: Option<&()> = None;

/// Normalized failure shape for every backend call.
///
/// `Display` yields the user-facing message; the `Status` variant keeps the
/// HTTP status so callers can branch on it (the session restore tolerates a
/// 404 from the current-user lookup).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the backend (DNS, refused connection, I/O).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status, or a 2xx envelope
    /// with `success: false`. `message` prefers the server-supplied text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected envelope shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// HTTP client for communicating with the expense backend.
///
/// Maintains a connection pool, reads the bearer token from persistent
/// storage on every call, and never mutates the session store itself.
/// One attempt per call: no retry, no client-side timeout, no backoff.
pub struct ApiClient {
    http: Client,
    base_url: String,
    storage: Arc<dyn KeyValueStorage>,
}

impl ApiClient {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let base_url =
            std::env::var("EXPENSE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            http: Client::new(),
            base_url,
            storage,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer_token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY)
    }

    /// Send a JSON request and unwrap the `{success, message, data}` envelope.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let start = std::time::Instant::now();
        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "Request network error");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
                tracing::error!(path, error = %e, "Response parse error");
                ApiError::Decode(e.to_string())
            })?;
            let result = Self::unwrap_envelope(status.as_u16(), envelope);
            match &result {
                Ok(_) => tracing::debug!(
                    path,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Request succeeded"
                ),
                Err(e) => tracing::warn!(path, error = %e, "Request rejected by envelope"),
            }
            result
        } else {
            let error = Self::status_error(status, response).await;
            tracing::warn!(
                path,
                status = status.as_u16(),
                error = %error,
                duration_ms = start.elapsed().as_millis() as u64,
                "Request failed"
            );
            Err(error)
        }
    }

    /// Variant for acknowledgement-only endpoints (delete): the envelope
    /// carries no meaningful `data`.
    pub(crate) async fn request_ack(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "Request network error");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Request rejected by the server".to_string()),
            });
        }
        Ok(())
    }

    /// Multipart POST, bypassing the JSON content type (file uploads).
    pub(crate) async fn request_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let mut request = self.http.post(self.endpoint(path)).multipart(form);
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "Upload network error");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        if status.is_success() {
            let envelope: ApiEnvelope<T> = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Self::unwrap_envelope(status.as_u16(), envelope)
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    fn unwrap_envelope<T>(status: u16, envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
        if !envelope.success {
            return Err(ApiError::Status {
                status,
                message: envelope
                    .message
                    .unwrap_or_else(|| "Request rejected by the server".to_string()),
            });
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("response envelope is missing data".to_string()))
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

// The trait keeps screens and tasks independent of the concrete client.
#[async_trait]
impl ApiService for ApiClient {
    async fn signup(
        &self,
        request: shared::SignupRequest,
    ) -> Result<shared::AuthResponse, ApiError> {
        super::auth::signup(self, request).await
    }

    async fn login(&self, request: shared::LoginRequest) -> Result<shared::AuthResponse, ApiError> {
        super::auth::login(self, request).await
    }

    async fn get_me(&self) -> Result<shared::UserInfo, ApiError> {
        super::auth::get_me(self).await
    }

    async fn get_profile(&self) -> Result<shared::UserInfo, ApiError> {
        super::profile::get_profile(self).await
    }

    async fn update_profile(
        &self,
        update: shared::ProfileUpdate,
    ) -> Result<shared::UserInfo, ApiError> {
        super::profile::update_profile(self, update).await
    }

    async fn list_expenses(&self, days: u32) -> Result<Vec<shared::Expense>, ApiError> {
        super::expenses::list(self, days).await
    }

    async fn get_expense(&self, id: &str) -> Result<shared::Expense, ApiError> {
        super::expenses::get(self, id).await
    }

    async fn create_expense(
        &self,
        payload: shared::ExpensePayload,
    ) -> Result<shared::Expense, ApiError> {
        super::expenses::create(self, payload).await
    }

    async fn update_expense(
        &self,
        id: &str,
        payload: shared::ExpensePayload,
    ) -> Result<shared::Expense, ApiError> {
        super::expenses::update(self, id, payload).await
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        super::expenses::delete(self, id).await
    }

    async fn upload_file(
        &self,
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<shared::UploadResponse, ApiError> {
        super::files::upload(self, filename, bytes).await
    }

    async fn list_files(&self) -> Result<shared::FileListing, ApiError> {
        super::files::list(self).await
    }

    fn download_url(&self, key: &str) -> String {
        format!("{}/s3/files/{}", self.base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_envelope_returns_data() {
        let envelope = ApiEnvelope {
            success: true,
            message: None,
            data: Some(vec![1, 2, 3]),
        };
        assert_eq!(ApiClient::unwrap_envelope(200, envelope).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn unwrap_envelope_rejecting_success_flag_carries_server_message() {
        let envelope: ApiEnvelope<()> = ApiEnvelope {
            success: false,
            message: Some("insufficient permissions".to_string()),
            data: None,
        };
        let err = ApiClient::unwrap_envelope::<()>(200, envelope).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 200,
                message: "insufficient permissions".to_string()
            }
        );
    }

    #[test]
    fn unwrap_envelope_missing_data_is_a_decode_error() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: true,
            message: None,
            data: None,
        };
        assert!(matches!(
            ApiClient::unwrap_envelope(200, envelope).unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn not_found_predicate_matches_only_404() {
        let not_found = ApiError::Status {
            status: 404,
            message: "missing".to_string(),
        };
        let server_error = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(not_found.is_not_found());
        assert!(!server_error.is_not_found());
        assert!(!ApiError::Network("down".to_string()).is_not_found());
    }
}
