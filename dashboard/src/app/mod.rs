//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI rendering layer, the user action
//! handlers, and the async tasks that talk to the backend.
//!
//! ## Architecture
//!
//! ```text
//! screen render ──click──▶ handler (validate) ──spawn──▶ task ──HTTP──▶ backend
//!      ▲                                                   │
//!      │                                                   ▼
//!  AppState ◀──apply── event handler ◀──channel── AppEvent (task result)
//! ```
//!
//! State lives in `Arc<RwLock<AppState>>`; locks are held briefly on both
//! sides. Task results arrive as [`AppEvent`] messages on an unbounded
//! channel and are drained once per frame in [`App::on_tick`].

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::{AppEvent, NotifyLevel};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use crate::services::storage::{FileStorage, KeyValueStorage};
use event_handler::AppEventHandler;
use shared::{Expense, StoredFile};

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. All `handle_*` methods are
/// thin wrappers over the handler functions so screens only ever need
/// `&mut App`.
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled in [`App::on_tick`]
    pub event_rx: Receiver<AppEvent>,
    /// Channel sender cloned into every spawned task
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the production application: file-backed storage, the real HTTP
    /// client, and a session restore kicked off immediately.
    pub fn new() -> Self {
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(FileStorage::open(FileStorage::default_path()));
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(storage.clone()));

        let app = Self::with_parts(api, storage);
        app.state.write().restoring_session = true;
        tasks::session::restore_session(app.state.clone(), app.event_tx.clone());
        tracing::info!("App state initialized, session restore started");
        app
    }

    /// Assemble an application from injected parts. Used by [`App::new`] and
    /// by tests, which substitute in-memory storage and a fake backend.
    pub fn with_parts(api: Arc<dyn ApiService>, storage: Arc<dyn KeyValueStorage>) -> Self {
        let state = AppState::new(api, storage);
        let (event_tx, event_rx) = unbounded();
        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Drain pending task results. Called once per frame; non-blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply one task result to state.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    // Auth -----------------------------------------------------------------

    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), email, password);
    }

    pub fn handle_signup_click(
        &mut self,
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) {
        handlers::auth::handle_signup_click(
            self.state.clone(),
            self.event_tx.clone(),
            name,
            email,
            password,
            confirm_password,
        );
    }

    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_signup(&mut self) {
        handlers::auth::handle_switch_to_signup(self.state.clone());
    }

    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    // Navigation -----------------------------------------------------------

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Navigate to the next screen in cycle order
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone(), self.event_tx.clone());
    }

    /// Navigate to the previous screen in cycle order
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone(), self.event_tx.clone());
    }

    /// Re-fetch whatever backs the current screen
    pub fn refresh_current_screen(&mut self) {
        let screen = self.state.read().current_screen;
        handlers::navigation::refresh_screen(self.state.clone(), self.event_tx.clone(), screen);
    }

    // Expenses ---------------------------------------------------------------

    pub fn handle_days_window_change(&mut self, days: u32) {
        handlers::expenses::handle_days_window_change(self.state.clone(), self.event_tx.clone(), days);
    }

    pub fn handle_expense_editor_open(&mut self, expense: Option<&Expense>) {
        handlers::expenses::handle_editor_open(self.state.clone(), self.event_tx.clone(), expense);
    }

    pub fn handle_expense_editor_close(&mut self) {
        handlers::expenses::handle_editor_close(self.state.clone());
    }

    pub fn handle_expense_save_click(&mut self) {
        handlers::expenses::handle_save_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_expense_delete_click(&mut self, id: String) {
        handlers::expenses::handle_delete_click(self.state.clone(), self.event_tx.clone(), id);
    }

    pub fn handle_attach_file(&mut self, file: &StoredFile) {
        handlers::expenses::handle_attach_file(self.state.clone(), file);
    }

    pub fn handle_remove_attachment(&mut self, index: usize) {
        handlers::expenses::handle_remove_attachment(self.state.clone(), index);
    }

    // Files ------------------------------------------------------------------

    pub fn handle_upload_click(&mut self) {
        handlers::files::handle_upload_click(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_download_click(&mut self, key: &str) {
        handlers::files::handle_download_click(self.state.clone(), key);
    }

    // Profile ----------------------------------------------------------------

    pub fn handle_profile_save_click(&mut self) {
        handlers::profile::handle_save_click(self.state.clone(), self.event_tx.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{test_auth_response, test_expense, FakeBackend};
    use crate::services::api::ApiError;
    use crate::services::storage::{
        MemoryStorage, AUTH_TOKEN_KEY, TOKEN_EXPIRY_KEY, USER_DATA_KEY,
    };
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, day).unwrap()
    }

    fn test_app(api: Arc<FakeBackend>) -> (App, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let app = App::with_parts(api, storage.clone());
        (app, storage)
    }

    /// Receive the next task result and apply it to state.
    async fn pump(app: &mut App) {
        let event = app.event_rx.recv().await.expect("task result expected");
        app.handle_event(event);
    }

    #[tokio::test]
    async fn login_flow_persists_session_and_loads_expenses() {
        let api = Arc::new(FakeBackend::with_expenses(vec![test_expense(
            "e-1", 10.0, "food", date(1),
        )]));
        let (mut app, storage) = test_app(api);

        app.handle_login_click("alice@example.com".to_string(), "Password123".to_string());
        pump(&mut app).await; // LoginResult

        {
            let state = app.state.read();
            assert!(state.is_authenticated());
            assert_eq!(state.current_screen, Screen::Expenses);
        }
        assert!(storage.get(AUTH_TOKEN_KEY).is_some());
        assert!(storage.get(TOKEN_EXPIRY_KEY).is_some());
        assert!(storage.get(USER_DATA_KEY).is_some());

        pump(&mut app).await; // ExpensesLoaded
        assert_eq!(app.state.read().expenses.expenses.len(), 1);
    }

    #[tokio::test]
    async fn failed_login_stays_anonymous_with_an_inline_error() {
        let api = Arc::new(FakeBackend::new());
        *api.login_response.lock() = Err(ApiError::Status {
            status: 401,
            message: "invalid credentials".to_string(),
        });
        let (mut app, storage) = test_app(api);

        app.handle_login_click("alice@example.com".to_string(), "wrong-pass".to_string());
        pump(&mut app).await; // LoginResult

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Auth);
        match &state.auth {
            AuthState::Login { error, .. } => {
                assert_eq!(error.as_deref(), Some("invalid credentials"));
            }
            AuthState::Signup { .. } => panic!("login form expected"),
        }
        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn delete_removes_expense_from_the_reloaded_list() {
        let api = Arc::new(FakeBackend::with_expenses(vec![
            test_expense("e-1", 10.0, "food", date(1)),
            test_expense("e-2", 20.0, "travel", date(2)),
        ]));
        let (mut app, _) = test_app(api);
        app.state.write().session.establish(&test_auth_response());

        app.handle_screen_change(Screen::Expenses);
        pump(&mut app).await; // ExpensesLoaded
        assert_eq!(app.state.read().expenses.expenses.len(), 2);

        app.handle_expense_delete_click("e-1".to_string());
        pump(&mut app).await; // ExpenseDeleted (ok) -> triggers reload
        pump(&mut app).await; // ExpensesLoaded

        let state = app.state.read();
        assert_eq!(state.expenses.expenses.len(), 1);
        assert!(state.expenses.expenses.iter().all(|e| e.id != "e-1"));
    }

    #[tokio::test]
    async fn second_delete_reports_failure_and_leaves_state_unchanged() {
        let api = Arc::new(FakeBackend::with_expenses(vec![test_expense(
            "e-1", 10.0, "food", date(1),
        )]));
        let (mut app, _) = test_app(api);
        app.state.write().session.establish(&test_auth_response());

        app.handle_expense_delete_click("e-1".to_string());
        pump(&mut app).await; // ExpenseDeleted (ok)
        pump(&mut app).await; // ExpensesLoaded (now empty)
        assert!(app.state.read().expenses.expenses.is_empty());
        app.state.write().pending_notifications.clear();

        app.handle_expense_delete_click("e-1".to_string());
        pump(&mut app).await; // ExpenseDeleted (404)

        let state = app.state.read();
        assert!(state.expenses.expenses.is_empty());
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, _)| *level == NotifyLevel::Error));
        // No reload was triggered for the failed delete.
        assert!(app.event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn upload_then_list_includes_the_filename_exactly_once() {
        let api = Arc::new(FakeBackend::new());
        let (mut app, _) = test_app(api);
        app.state.write().session.establish(&test_auth_response());

        // As the upload handler would after the file dialog.
        app.state.write().files.uploading = true;
        tasks::files::upload_file(
            app.state.clone(),
            app.event_tx.clone(),
            "receipt.pdf".to_string(),
            vec![1, 2, 3],
        );
        pump(&mut app).await; // FileUploaded -> triggers listing reload
        assert!(!app.state.read().files.uploading);
        pump(&mut app).await; // FilesLoaded

        let state = app.state.read();
        let matches = state
            .files
            .files
            .iter()
            .filter(|f| f.original_filename == "receipt.pdf")
            .count();
        assert_eq!(matches, 1);
        assert_eq!(state.files.total_count, 1);
    }

    #[tokio::test]
    async fn save_with_editor_open_creates_and_closes() {
        let api = Arc::new(FakeBackend::new());
        let (mut app, _) = test_app(api.clone());
        app.state.write().session.establish(&test_auth_response());
        app.state.write().expenses.editor = Some(ExpenseForm {
            expense_date: "2026-07-14".to_string(),
            amount: "42".to_string(),
            category: "groceries".to_string(),
            ..ExpenseForm::default()
        });

        app.handle_expense_save_click();
        pump(&mut app).await; // ExpenseSaved -> triggers reload
        pump(&mut app).await; // ExpensesLoaded

        let state = app.state.read();
        assert!(state.expenses.editor.is_none());
        assert_eq!(state.expenses.expenses.len(), 1);
        assert_eq!(state.expenses.expenses[0].amount, 42.0);
    }

    #[test]
    fn stale_reload_results_are_dropped() {
        let api = Arc::new(FakeBackend::new());
        let (mut app, _) = test_app(api);
        app.state.write().expenses.reload_seq = 5;

        // A result issued under an older reload id arrives late and loses.
        app.handle_event(AppEvent::ExpensesLoaded {
            seq: 4,
            result: Ok(vec![test_expense("stale", 1.0, "old", date(1))]),
        });
        assert!(app.state.read().expenses.expenses.is_empty());

        // The current reload id wins.
        app.handle_event(AppEvent::ExpensesLoaded {
            seq: 5,
            result: Ok(vec![test_expense("fresh", 2.0, "new", date(2))]),
        });
        let state = app.state.read();
        assert_eq!(state.expenses.expenses.len(), 1);
        assert_eq!(state.expenses.expenses[0].id, "fresh");
    }

    #[tokio::test]
    async fn restored_session_lands_on_expenses() {
        let api = Arc::new(FakeBackend::new());
        let (mut app, _) = test_app(api);
        app.state.write().session.establish(&test_auth_response());
        // Simulate a fresh process: in-memory session gone, storage intact.
        app.state.write().session.apply_restore(
            crate::services::session::RestoreOutcome::Anonymous,
        );
        app.state.write().restoring_session = true;

        tasks::session::restore_session(app.state.clone(), app.event_tx.clone());
        pump(&mut app).await; // SessionRestored

        {
            let state = app.state.read();
            assert!(!state.restoring_session);
            assert!(state.is_authenticated());
            assert_eq!(state.current_screen, Screen::Expenses);
        }
        pump(&mut app).await; // ExpensesLoaded
    }
}
