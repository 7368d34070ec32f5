//! # File Store DTOs
//!
//! Shapes reported by the `/s3/*` endpoints. All metadata here is
//! backend-reported; the client never computes or verifies these fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `POST /s3/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub file_key: String,
    pub original_filename: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Metadata of one stored object, as listed by `GET /s3/files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredFile {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub etag: String,
    pub original_filename: String,
}

/// Response of `GET /s3/files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileListing {
    pub files: Vec<StoredFile>,
    pub total_count: usize,
}
