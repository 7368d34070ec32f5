//! # File Store Endpoints
//!
//! Uploads go out as multipart form data (the one exception to the JSON
//! content type); listings come back in the usual envelope. Downloads are
//! static fetches of `/s3/files/{key}` and never go through this module;
//! the URL is handed to the OS browser instead.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::client::{ApiClient, ApiError, NO_BODY};
use shared::{FileListing, UploadResponse};

/// Upload a file to the object store.
#[tracing::instrument(skip(client, bytes), fields(filename = %filename, size = bytes.len()))]
pub async fn upload(
    client: &ApiClient,
    filename: String,
    bytes: Vec<u8>,
) -> Result<UploadResponse, ApiError> {
    tracing::info!("Uploading file");
    let part = Part::bytes(bytes).file_name(filename);
    let form = Form::new().part("file", part);
    client.request_multipart("/s3/upload", form).await
}

/// List stored files.
pub async fn list(client: &ApiClient) -> Result<FileListing, ApiError> {
    client.request(Method::GET, "/s3/files", NO_BODY).await
}
