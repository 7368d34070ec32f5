//! # Profile Handlers
//!
//! Validation gate in front of profile updates.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::utils::validation;
use shared::ProfileUpdate;

/// Handle profile save click.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (name, email) = {
        let state = state.read();
        (state.profile.name.clone(), state.profile.email.clone())
    };

    let name_check = validation::validate_name(&name);
    if !name_check.is_valid {
        state.write().profile.error = name_check.error;
        return;
    }
    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        state.write().profile.error = email_check.error;
        return;
    }

    state.write().profile.error = None;
    tasks::profile::save_profile(
        state,
        event_tx,
        ProfileUpdate {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeBackend;
    use crate::services::storage::MemoryStorage;

    #[test]
    fn blank_name_blocks_the_update_call() {
        let api = Arc::new(FakeBackend::new());
        let storage = Arc::new(MemoryStorage::new());
        let state = Arc::new(RwLock::new(AppState::new(api.clone(), storage)));
        {
            let mut s = state.write();
            s.profile.name = "   ".to_string();
            s.profile.email = "alice@example.com".to_string();
        }
        let (tx, _rx) = async_channel::unbounded();

        handle_save_click(state.clone(), tx);

        assert_eq!(api.call_count(), 0);
        assert!(state.read().profile.error.is_some());
    }
}
