//! # Session Tasks
//!
//! Startup restore of a persisted session.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::session;
use crate::utils::runtime::TOKIO_RT;

/// Restore a persisted session, if any, and report the outcome.
pub(crate) fn restore_session(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, storage) = {
        let state = state.read();
        (state.api.clone(), state.session.storage())
    };

    TOKIO_RT.spawn(async move {
        let outcome = session::restore_session(storage.as_ref(), api.as_ref()).await;
        let _ = event_tx.send(AppEvent::SessionRestored(outcome)).await;
    });
}
