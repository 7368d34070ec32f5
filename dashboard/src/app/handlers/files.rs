//! # File Manager Handlers
//!
//! Upload (behind a native file dialog) and download (handed to the OS
//! browser).

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::{AppEvent, NotifyLevel};
use crate::app::state::AppState;
use crate::app::tasks;

/// Handle upload button click: pick a file, read it, and start the upload.
///
/// The trigger control is disabled while an upload is in flight; the flag
/// check here is the backstop for queued clicks.
pub(crate) fn handle_upload_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    if state.read().files.uploading {
        return;
    }

    let Some(path) = rfd::FileDialog::new()
        .set_title("Choose a file to upload")
        .pick_file()
    else {
        return;
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.bin".to_string());

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read file for upload");
            state.write().notify(
                NotifyLevel::Error,
                format!("Failed to read {}: {}", path.display(), e),
            );
            return;
        }
    };

    state.write().files.uploading = true;
    tasks::files::upload_file(state, event_tx, filename, bytes);
}

/// Handle download button click: open the static file URL in the browser.
pub(crate) fn handle_download_click(state: Arc<RwLock<AppState>>, key: &str) {
    let url = state.read().api.download_url(key);
    if let Err(e) = open::that(&url) {
        tracing::error!(url = %url, error = %e, "Failed to open download in browser");
        state.write().notify(
            NotifyLevel::Error,
            "Failed to open the download in your browser".to_string(),
        );
    }
}
