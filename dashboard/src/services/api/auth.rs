//! # Authentication Endpoints
//!
//! Signup, login, and the optional current-user lookup.

use reqwest::Method;

use super::client::{ApiClient, ApiError, NO_BODY};
use shared::{AuthResponse, LoginRequest, SignupRequest, UserInfo};

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");
    client
        .request(Method::POST, "/auth/login", Some(&request))
        .await
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn signup(client: &ApiClient, request: SignupRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting signup");
    client
        .request(Method::POST, "/auth/signup", Some(&request))
        .await
}

/// Fetch the current user.
///
/// Optional server-side; callers treat a 404 as "endpoint missing", not
/// "session invalid".
pub async fn get_me(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.request(Method::GET, "/auth/me", NO_BODY).await
}
