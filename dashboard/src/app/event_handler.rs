//! # Event Handler
//!
//! Applies async task results to application state. Every failure degrades
//! to a visible state change (an inline message, a toast, or a redirect),
//! never a crash.

use crate::app::events::NotifyLevel;
use crate::app::state::{AuthState, Screen};
use crate::app::tasks;
use crate::app::{App, AppEvent};
use crate::services::api::ApiError;
use crate::services::session::RestoreOutcome;
use shared::{AuthResponse, Expense, FileListing, UploadResponse, UserInfo};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionRestored(outcome) => self.handle_session_restored(outcome),
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::SignupResult(result) => self.handle_signup_result(result),
            AppEvent::ExpensesLoaded { seq, result } => self.handle_expenses_loaded(seq, result),
            AppEvent::ExpenseSaved(result) => self.handle_expense_saved(result),
            AppEvent::ExpenseDeleted { id, result } => self.handle_expense_deleted(&id, result),
            AppEvent::FilesLoaded(result) => self.handle_files_loaded(result),
            AppEvent::FileUploaded(result) => self.handle_file_uploaded(result),
            AppEvent::ProfileLoaded(result) => self.handle_profile_loaded(result),
            AppEvent::ProfileSaved(result) => self.handle_profile_saved(result),
            AppEvent::Notify(level, message) => self.state.write().notify(level, message),
        }
    }
}

impl App {
    fn handle_session_restored(&mut self, outcome: RestoreOutcome) {
        let authenticated = matches!(outcome, RestoreOutcome::Authenticated { .. });
        {
            let mut state = self.state.write();
            state.restoring_session = false;
            state.session.apply_restore(outcome);
            state.current_screen = if authenticated {
                Screen::Expenses
            } else {
                Screen::Auth
            };
        }
        if authenticated {
            tracing::info!("Session restored");
            tasks::expenses::load_expenses(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_login_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(success = result.is_ok(), "Processing login result");
        match result {
            Ok(auth) => {
                {
                    let mut state = self.state.write();
                    state.session.establish(&auth);
                    state.auth = AuthState::login_form();
                    state.current_screen = Screen::Expenses;
                    let greeting = format!("Signed in as {}", auth.user.name);
                    state.notify(NotifyLevel::Success, greeting);
                }
                tasks::expenses::load_expenses(self.state.clone(), self.event_tx.clone());
            }
            Err(err) => {
                let mut state = self.state.write();
                if let AuthState::Login { error, .. } = &mut state.auth {
                    *error = Some(err.to_string());
                }
            }
        }
    }

    fn handle_signup_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(success = result.is_ok(), "Processing signup result");
        match result {
            Ok(auth) => {
                {
                    let mut state = self.state.write();
                    state.session.establish(&auth);
                    state.auth = AuthState::login_form();
                    state.current_screen = Screen::Expenses;
                    let greeting = format!("Welcome, {}", auth.user.name);
                    state.notify(NotifyLevel::Success, greeting);
                }
                tasks::expenses::load_expenses(self.state.clone(), self.event_tx.clone());
            }
            Err(err) => {
                let mut state = self.state.write();
                if let AuthState::Signup { error, .. } = &mut state.auth {
                    *error = Some(err.to_string());
                }
            }
        }
    }

    fn handle_expenses_loaded(&mut self, seq: u64, result: Result<Vec<Expense>, ApiError>) {
        let mut state = self.state.write();
        // Last-request-wins: results issued under an older reload id lost
        // the race to a newer reload and are dropped.
        if seq != state.expenses.reload_seq {
            tracing::debug!(
                seq,
                current = state.expenses.reload_seq,
                "Dropping stale expense reload result"
            );
            return;
        }
        state.expenses.loading = false;
        match result {
            Ok(expenses) => {
                tracing::debug!(count = expenses.len(), "Expense list loaded");
                state.expenses.expenses = expenses;
                state.expenses.error = None;
            }
            Err(err) => {
                state.expenses.error = Some(err.to_string());
                state.notify(NotifyLevel::Error, err.to_string());
            }
        }
    }

    fn handle_expense_saved(&mut self, result: Result<Expense, ApiError>) {
        let reload = {
            let mut state = self.state.write();
            state.expenses.saving = false;
            match result {
                Ok(expense) => {
                    state.expenses.editor = None;
                    let message = format!("Saved {} expense", expense.category);
                    state.notify(NotifyLevel::Success, message);
                    true
                }
                Err(err) => {
                    // Keep the editor open so nothing the user typed is lost.
                    state.notify(NotifyLevel::Error, err.to_string());
                    false
                }
            }
        };
        if reload {
            tasks::expenses::load_expenses(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_expense_deleted(&mut self, id: &str, result: Result<(), ApiError>) {
        tracing::info!(id, success = result.is_ok(), "Processing expense delete result");
        let reload = {
            let mut state = self.state.write();
            match result {
                Ok(()) => {
                    state.notify(NotifyLevel::Success, "Expense deleted".to_string());
                    true
                }
                Err(err) => {
                    state.notify(NotifyLevel::Error, err.to_string());
                    false
                }
            }
        };
        if reload {
            tasks::expenses::load_expenses(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_files_loaded(&mut self, result: Result<FileListing, ApiError>) {
        let mut state = self.state.write();
        state.files.loading = false;
        match result {
            Ok(listing) => {
                state.files.files = listing.files;
                state.files.total_count = listing.total_count;
                state.files.error = None;
            }
            Err(err) => {
                state.files.error = Some(err.to_string());
                state.notify(NotifyLevel::Error, err.to_string());
            }
        }
    }

    fn handle_file_uploaded(&mut self, result: Result<UploadResponse, ApiError>) {
        let reload = {
            let mut state = self.state.write();
            state.files.uploading = false;
            match result {
                Ok(upload) => {
                    let message = format!("Uploaded {}", upload.original_filename);
                    state.notify(NotifyLevel::Success, message);
                    true
                }
                Err(err) => {
                    state.notify(NotifyLevel::Error, err.to_string());
                    false
                }
            }
        };
        if reload {
            tasks::files::load_files(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_profile_loaded(&mut self, result: Result<UserInfo, ApiError>) {
        let mut state = self.state.write();
        state.profile.loading = false;
        match result {
            Ok(user) => {
                state.profile.name = user.name;
                state.profile.email = user.email;
                state.profile.error = None;
            }
            Err(err) => {
                state.profile.error = Some(err.to_string());
                state.notify(NotifyLevel::Error, err.to_string());
            }
        }
    }

    fn handle_profile_saved(&mut self, result: Result<UserInfo, ApiError>) {
        let mut state = self.state.write();
        state.profile.saving = false;
        match result {
            Ok(user) => {
                state.profile.name = user.name.clone();
                state.profile.email = user.email.clone();
                // Keep the cached snapshot roughly current for optimistic
                // display; authorization still rests on the token.
                state.session.refresh_user(user);
                state.notify(NotifyLevel::Success, "Profile updated".to_string());
            }
            Err(err) => {
                state.notify(NotifyLevel::Error, err.to_string());
            }
        }
    }
}
