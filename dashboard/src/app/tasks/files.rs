//! # File Store Tasks
//!
//! Async upload and listing against the object-store endpoints.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;

/// Reload the stored-file listing.
pub(crate) fn load_files(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = {
        let mut state = state.write();
        state.files.loading = true;
        state.api.clone()
    };

    TOKIO_RT.spawn(async move {
        let result = api.list_files().await;
        let _ = event_tx.send(AppEvent::FilesLoaded(result)).await;
    });
}

/// Upload one file. The caller has already read the bytes and set the
/// `uploading` flag that disables the trigger control.
pub(crate) fn upload_file(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    filename: String,
    bytes: Vec<u8>,
) {
    let api = state.read().api.clone();

    TOKIO_RT.spawn(async move {
        let result = api.upload_file(filename, bytes).await;
        let _ = event_tx.send(AppEvent::FileUploaded(result)).await;
    });
}
