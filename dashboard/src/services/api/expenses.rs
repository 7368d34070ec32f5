//! # Expense Endpoints
//!
//! CRUD against `/expenses`. All calls carry the bearer token; the backend
//! scopes records to the authenticated user.

use reqwest::Method;

use super::client::{ApiClient, ApiError, NO_BODY};
use shared::{Expense, ExpensePayload};

/// List expenses within the last `days` days.
pub async fn list(client: &ApiClient, days: u32) -> Result<Vec<Expense>, ApiError> {
    client
        .request(Method::GET, &format!("/expenses?days={days}"), NO_BODY)
        .await
}

/// Fetch a single expense by id.
pub async fn get(client: &ApiClient, id: &str) -> Result<Expense, ApiError> {
    client
        .request(Method::GET, &format!("/expenses/{id}"), NO_BODY)
        .await
}

/// Create a new expense.
#[tracing::instrument(skip(client, payload), fields(category = %payload.category))]
pub async fn create(client: &ApiClient, payload: ExpensePayload) -> Result<Expense, ApiError> {
    client
        .request(Method::POST, "/expenses", Some(&payload))
        .await
}

/// Update an existing expense.
#[tracing::instrument(skip(client, payload))]
pub async fn update(
    client: &ApiClient,
    id: &str,
    payload: ExpensePayload,
) -> Result<Expense, ApiError> {
    client
        .request(Method::PUT, &format!("/expenses/{id}"), Some(&payload))
        .await
}

/// Delete an expense. The backend acknowledges without a payload.
#[tracing::instrument(skip(client))]
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .request_ack(Method::DELETE, &format!("/expenses/{id}"))
        .await
}
