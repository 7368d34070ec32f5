//! # Profile Tasks
//!
//! Async read/update of the caller's profile.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use shared::ProfileUpdate;

/// Fetch the profile record backing the editor.
pub(crate) fn load_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = {
        let mut state = state.write();
        state.profile.loading = true;
        state.api.clone()
    };

    TOKIO_RT.spawn(async move {
        let result = api.get_profile().await;
        let _ = event_tx.send(AppEvent::ProfileLoaded(result)).await;
    });
}

/// Save profile changes.
pub(crate) fn save_profile(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    update: ProfileUpdate,
) {
    let api = {
        let mut state = state.write();
        state.profile.saving = true;
        state.api.clone()
    };

    TOKIO_RT.spawn(async move {
        let result = api.update_profile(update).await;
        let _ = event_tx.send(AppEvent::ProfileSaved(result)).await;
    });
}
