//! # Profile Endpoints
//!
//! Read and update the caller's own profile record.

use reqwest::Method;

use super::client::{ApiClient, ApiError, NO_BODY};
use shared::{ProfileUpdate, UserInfo};

/// Read the caller's profile.
pub async fn get_profile(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.request(Method::GET, "/profiles/me", NO_BODY).await
}

/// Update the caller's profile.
#[tracing::instrument(skip(client, update), fields(email = %update.email))]
pub async fn update_profile(
    client: &ApiClient,
    update: ProfileUpdate,
) -> Result<UserInfo, ApiError> {
    client
        .request(Method::PUT, "/profiles/me", Some(&update))
        .await
}
