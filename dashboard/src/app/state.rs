//! # Application State Types
//!
//! All state rendered by the screens: navigation, auth forms, per-screen
//! sub-states, and the owned session store. The UI thread reads a snapshot
//! each frame; handlers and the event handler mutate behind the lock.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::events::NotifyLevel;
use crate::core::service::ApiService;
use crate::services::session::SessionStore;
use crate::services::storage::KeyValueStorage;
use crate::utils::validation;
use shared::{Attachment, Expense, ExpensePayload, StoredFile};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in / sign-up screen (the entry screen)
    Auth,
    /// Expense list and editor
    Expenses,
    /// Spending overview with aggregate charts
    Overview,
    /// Uploaded-file manager
    Files,
    /// Profile editor
    Profile,
}

impl Screen {
    /// All screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Auth,
            Screen::Expenses,
            Screen::Overview,
            Screen::Files,
            Screen::Profile,
        ]
    }

    /// Screen title for the header
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Sign In",
            Screen::Expenses => "Expenses",
            Screen::Overview => "Overview",
            Screen::Files => "Files",
            Screen::Profile => "Profile",
        }
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Login form
    Login {
        email: String,
        password: String,
        error: Option<String>,
    },
    /// Signup form
    Signup {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
        error: Option<String>,
    },
}

impl AuthState {
    pub fn login_form() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }

    pub fn signup_form() -> Self {
        AuthState::Signup {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
        }
    }
}

/// Per-field inline errors for the expense editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFormErrors {
    pub expense_date: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl ExpenseFormErrors {
    pub fn is_clean(&self) -> bool {
        self.expense_date.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

/// Expense editor form, holding raw user input as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    /// `Some` when editing an existing record
    pub id: Option<String>,
    pub expense_date: String,
    pub amount: String,
    pub category: String,
    pub merchant: String,
    pub note: String,
    /// Comma-separated tags
    pub tags: String,
    pub attachments: Vec<Attachment>,
    pub errors: ExpenseFormErrors,
}

impl ExpenseForm {
    /// Empty form for a new expense, dated today.
    pub fn for_new(today: NaiveDate) -> Self {
        Self {
            expense_date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Form pre-filled from an existing record.
    pub fn for_expense(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id.clone()),
            expense_date: expense.expense_date.format("%Y-%m-%d").to_string(),
            amount: format!("{}", expense.amount),
            category: expense.category.clone(),
            merchant: expense.merchant.clone().unwrap_or_default(),
            note: expense.note.clone().unwrap_or_default(),
            tags: expense.tags.clone().unwrap_or_default().join(", "),
            attachments: expense.attachments.clone().unwrap_or_default(),
            errors: ExpenseFormErrors::default(),
        }
    }

    /// Validate the form and build the submission payload.
    ///
    /// Validation runs before any network call; a failure returns the
    /// per-field errors to render inline and nothing leaves the process.
    pub fn validate(&self) -> Result<ExpensePayload, ExpenseFormErrors> {
        let errors = ExpenseFormErrors {
            expense_date: validation::validate_expense_date(&self.expense_date).error,
            amount: validation::validate_amount(&self.amount).error,
            category: validation::validate_category(&self.category).error,
        };
        if !errors.is_clean() {
            return Err(errors);
        }

        // Both parses were just validated.
        let expense_date = validation::parse_expense_date(&self.expense_date)
            .ok_or_else(ExpenseFormErrors::default)?;
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| ExpenseFormErrors::default())?;

        let merchant = some_if_not_blank(&self.merchant);
        let note = some_if_not_blank(&self.note);
        let attachments = if self.attachments.is_empty() {
            None
        } else {
            Some(self.attachments.clone())
        };

        Ok(ExpensePayload {
            expense_date,
            amount,
            category: self.category.trim().to_string(),
            merchant,
            note,
            tags: validation::parse_tags(&self.tags),
            attachments,
        })
    }
}

fn some_if_not_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Expense list/editor screen state
#[derive(Debug, Clone, Default)]
pub struct ExpensesState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub saving: bool,
    /// Monotonically increasing reload id; results tagged with an older id
    /// are dropped (last-request-wins).
    pub reload_seq: u64,
    /// Open editor form, if any
    pub editor: Option<ExpenseForm>,
    pub error: Option<String>,
}

/// File manager screen state
#[derive(Debug, Clone, Default)]
pub struct FilesState {
    pub files: Vec<StoredFile>,
    pub total_count: usize,
    pub loading: bool,
    /// Upload in flight; the trigger control is disabled while set.
    pub uploading: bool,
    pub error: Option<String>,
}

/// Profile editor screen state
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub name: String,
    pub email: String,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Authentication form state
    pub auth: AuthState,
    /// The owned session store
    pub session: SessionStore,
    /// Startup session restore still in flight
    pub restoring_session: bool,
    /// Day window driving `GET /expenses?days=N`, shared by the expenses and
    /// overview screens
    pub days_window: u32,
    pub expenses: ExpensesState,
    pub files: FilesState,
    pub profile: ProfileState,
    /// Notifications waiting to be shown as toasts
    pub pending_notifications: Vec<(NotifyLevel, String)>,
    /// Backend access, injected so tests can substitute a fake
    pub api: Arc<dyn ApiService>,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiService>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            current_screen: Screen::Auth,
            auth: AuthState::login_form(),
            session: SessionStore::new(storage),
            restoring_session: false,
            days_window: 30,
            expenses: ExpensesState::default(),
            files: FilesState::default(),
            profile: ProfileState::default(),
            pending_notifications: Vec::new(),
            api,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Check if a screen requires authentication
    pub fn requires_auth(screen: Screen) -> bool {
        !matches!(screen, Screen::Auth)
    }

    pub fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ExpenseForm {
        ExpenseForm {
            expense_date: "2026-07-14".to_string(),
            amount: "12.50".to_string(),
            category: "groceries".to_string(),
            merchant: "  Corner Store ".to_string(),
            tags: "food, weekly".to_string(),
            ..ExpenseForm::default()
        }
    }

    #[test]
    fn valid_form_builds_payload() {
        let payload = valid_form().validate().expect("form is valid");
        assert_eq!(payload.amount, 12.5);
        assert_eq!(payload.category, "groceries");
        assert_eq!(payload.merchant.as_deref(), Some("Corner Store"));
        assert_eq!(
            payload.tags,
            Some(vec!["food".to_string(), "weekly".to_string()])
        );
        assert!(payload.note.is_none());
        assert!(payload.attachments.is_none());
    }

    #[test]
    fn non_positive_amount_errors_on_the_amount_field() {
        let mut form = valid_form();
        form.amount = "0".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.amount.is_some());
        assert!(errors.category.is_none());
        assert!(errors.expense_date.is_none());
    }

    #[test]
    fn oversized_amount_and_empty_category_error_together() {
        let mut form = valid_form();
        form.amount = "1000000".to_string();
        form.category = "  ".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.amount.is_some());
        assert!(errors.category.is_some());
    }

    #[test]
    fn malformed_date_errors_on_the_date_field() {
        let mut form = valid_form();
        form.expense_date = "July 14".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.expense_date.is_some());
    }

    #[test]
    fn form_round_trips_an_existing_expense() {
        let expense = crate::core::testing::test_expense(
            "e-9",
            45.0,
            "transport",
            NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(),
        );
        let form = ExpenseForm::for_expense(&expense);
        assert_eq!(form.id.as_deref(), Some("e-9"));
        assert_eq!(form.expense_date, "2026-06-02");

        let payload = form.validate().expect("round-tripped form is valid");
        assert_eq!(payload.amount, 45.0);
        assert_eq!(payload.category, "transport");
    }
}
