//! # Navigation Handlers
//!
//! Screen switching with the auth gate, plus keyboard cycling.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;

/// Switch screens. Screens other than sign-in require an authenticated
/// session; entering a data screen refreshes its contents.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    {
        let mut state = state.write();
        if AppState::requires_auth(screen) && !state.is_authenticated() {
            tracing::debug!(screen = ?screen, "Screen requires auth, redirecting to sign-in");
            state.current_screen = Screen::Auth;
            return;
        }
        if state.current_screen == screen {
            return;
        }
        state.current_screen = screen;
    }
    refresh_screen(state, event_tx, screen);
}

/// Kick off the fetch backing a data screen.
pub(crate) fn refresh_screen(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    match screen {
        Screen::Expenses | Screen::Overview => tasks::expenses::load_expenses(state, event_tx),
        Screen::Files => tasks::files::load_files(state, event_tx),
        Screen::Profile => tasks::profile::load_profile(state, event_tx),
        Screen::Auth => {}
    }
}

/// Navigate to the next screen in cycle order
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    step_screen(state, event_tx, 1);
}

/// Navigate to the previous screen in cycle order
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    step_screen(state, event_tx, -1);
}

fn step_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, step: isize) {
    let target = {
        let state = state.read();
        if !state.is_authenticated() {
            return;
        }
        let all = Screen::all();
        let current = all
            .iter()
            .position(|s| *s == state.current_screen)
            .unwrap_or(0) as isize;
        let mut index = current;
        loop {
            index = (index + step).rem_euclid(all.len() as isize);
            let candidate = all[index as usize];
            if candidate != Screen::Auth {
                break candidate;
            }
        }
    };
    handle_screen_change(state, event_tx, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{test_auth_response, FakeBackend};
    use crate::services::storage::MemoryStorage;

    fn test_state(api: Arc<FakeBackend>) -> Arc<RwLock<AppState>> {
        let storage = Arc::new(MemoryStorage::new());
        Arc::new(RwLock::new(AppState::new(api, storage)))
    }

    #[test]
    fn protected_screens_redirect_anonymous_users() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api.clone());
        let (tx, _rx) = async_channel::unbounded();

        handle_screen_change(state.clone(), tx, Screen::Expenses);

        assert_eq!(state.read().current_screen, Screen::Auth);
        assert_eq!(api.call_count(), 0);
    }

    #[test]
    fn cycling_skips_the_auth_screen() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api);
        {
            let mut s = state.write();
            s.session.establish(&test_auth_response());
            s.current_screen = Screen::Profile;
        }
        let (tx, rx) = async_channel::unbounded();

        next_screen(state.clone(), tx);

        // Profile is last in cycle order; the next non-auth screen wraps to
        // Expenses.
        assert_eq!(state.read().current_screen, Screen::Expenses);
        drop(rx);
    }
}
