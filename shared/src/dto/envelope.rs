//! # Response Envelope
//!
//! Every JSON response from the backend arrives wrapped in the same
//! `{success, message, data}` envelope; error responses carry a
//! `{detail|message}` body instead.

use serde::{Deserialize, Serialize};

/// Uniform wrapper around every successful JSON response.
///
/// `data` is absent on some acknowledgement-only responses (e.g. deletes),
/// so it stays optional here and callers decide whether a missing payload is
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Error body shape used by the backend on non-success statuses.
///
/// Some endpoints populate `detail`, others `message`; `detail` wins when
/// both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The server-supplied message, preferring `detail` over `message`.
    pub fn into_message(self) -> Option<String> {
        self.detail.or(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_missing_data_deserializes() {
        let envelope: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true, "message": "deleted"}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("deleted"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn error_body_prefers_detail() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "expense not found", "message": "error"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("expense not found"));
    }

    #[test]
    fn error_body_falls_back_to_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message": "bad request"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("bad request"));

        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.into_message().is_none());
    }
}
