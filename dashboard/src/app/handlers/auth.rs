//! # Authentication Handlers
//!
//! Handlers for login, signup, and logout.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, ExpensesState, FilesState, ProfileState, Screen};
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation;
use shared::{LoginRequest, SignupRequest};

/// Handle login button click
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        set_login_error(&state, email_check.error);
        return;
    }
    if password.is_empty() {
        set_login_error(&state, Some("Password is required".to_string()));
        return;
    }

    let api = state.read().api.clone();
    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api.login(LoginRequest { email, password }).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });

    set_login_error(&state, Some("Signing in...".to_string()));
}

/// Handle signup button click
pub(crate) fn handle_signup_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) {
    for check in [
        validation::validate_name(&name),
        validation::validate_email(&email),
        validation::validate_password(&password),
    ] {
        if !check.is_valid {
            set_signup_error(&state, check.error);
            return;
        }
    }
    if password != confirm_password {
        set_signup_error(&state, Some("Passwords don't match".to_string()));
        return;
    }

    let api = state.read().api.clone();
    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api
            .signup(SignupRequest {
                email,
                password,
                name,
            })
            .await;
        let _ = tx.send(AppEvent::SignupResult(result)).await;
    });

    set_signup_error(&state, Some("Creating account...".to_string()));
}

/// Switch to login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::login_form();
}

/// Switch to signup form
pub(crate) fn handle_switch_to_signup(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::signup_form();
}

/// Handle logout: tear down the session and land on the sign-in screen with
/// all per-screen state reset.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session.clear();
    state.current_screen = Screen::Auth;
    state.auth = AuthState::login_form();
    state.expenses = ExpensesState::default();
    state.files = FilesState::default();
    state.profile = ProfileState::default();
    tracing::info!("Logged out");
}

fn set_login_error(state: &Arc<RwLock<AppState>>, message: Option<String>) {
    let mut state = state.write();
    if let AuthState::Login { error, .. } = &mut state.auth {
        *error = message;
    }
}

fn set_signup_error(state: &Arc<RwLock<AppState>>, message: Option<String>) {
    let mut state = state.write();
    if let AuthState::Signup { error, .. } = &mut state.auth {
        *error = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeBackend;
    use crate::services::storage::MemoryStorage;

    fn test_state(api: Arc<FakeBackend>) -> Arc<RwLock<AppState>> {
        let storage = Arc::new(MemoryStorage::new());
        Arc::new(RwLock::new(AppState::new(api, storage)))
    }

    #[test]
    fn malformed_email_blocks_the_login_call() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api.clone());
        let (tx, _rx) = async_channel::unbounded();

        handle_login_click(state.clone(), tx, "not-an-email".to_string(), "Pw123456".to_string());

        assert_eq!(api.call_count(), 0);
        let state = state.read();
        match &state.auth {
            AuthState::Login { error, .. } => assert!(error.is_some()),
            AuthState::Signup { .. } => panic!("login form expected"),
        }
    }

    #[test]
    fn mismatched_passwords_block_the_signup_call() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api.clone());
        state.write().auth = AuthState::signup_form();
        let (tx, _rx) = async_channel::unbounded();

        handle_signup_click(
            state.clone(),
            tx,
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "Password123".to_string(),
            "Password124".to_string(),
        );

        assert_eq!(api.call_count(), 0);
        let state = state.read();
        match &state.auth {
            AuthState::Signup { error, .. } => {
                assert_eq!(error.as_deref(), Some("Passwords don't match"));
            }
            AuthState::Login { .. } => panic!("signup form expected"),
        }
    }

    #[test]
    fn logout_clears_session_and_screen_state() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api);
        {
            let mut s = state.write();
            s.session.establish(&crate::core::testing::test_auth_response());
            s.current_screen = Screen::Files;
            s.profile.name = "Alice".to_string();
        }

        handle_logout_click(state.clone());

        let state = state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state.profile.name.is_empty());
    }
}
