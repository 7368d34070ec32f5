//! # Expense Handlers
//!
//! Editor lifecycle, day-window changes, and the validation gate in front of
//! expense submissions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ExpenseForm, ExpenseFormErrors};
use crate::app::tasks;
use shared::{Attachment, Expense, StoredFile};

/// Open the editor, pre-filled when editing an existing record.
pub(crate) fn handle_editor_open(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    expense: Option<&Expense>,
) {
    {
        let mut state = state.write();
        state.expenses.editor = Some(match expense {
            Some(expense) => ExpenseForm::for_expense(expense),
            None => ExpenseForm::for_new(chrono::Local::now().date_naive()),
        });
    }
    // The attachment picker offers the stored files; refresh them alongside.
    tasks::files::load_files(state, event_tx);
}

/// Close the editor, discarding unsaved input.
pub(crate) fn handle_editor_close(state: Arc<RwLock<AppState>>) {
    state.write().expenses.editor = None;
}

/// Change the day window and reload.
pub(crate) fn handle_days_window_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    days: u32,
) {
    state.write().days_window = days;
    tasks::expenses::load_expenses(state, event_tx);
}

/// Handle save button click.
///
/// Validation failures set per-field inline errors and issue no network
/// call; a valid form is submitted as create or update depending on whether
/// the editor holds an existing id.
pub(crate) fn handle_save_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let Some(form) = state.read().expenses.editor.clone() else {
        return;
    };

    match form.validate() {
        Err(errors) => {
            let mut state = state.write();
            if let Some(editor) = &mut state.expenses.editor {
                editor.errors = errors;
            }
        }
        Ok(payload) => {
            {
                let mut state = state.write();
                state.expenses.saving = true;
                if let Some(editor) = &mut state.expenses.editor {
                    editor.errors = ExpenseFormErrors::default();
                }
            }
            tasks::expenses::save_expense(state, event_tx, form.id.clone(), payload);
        }
    }
}

/// Handle delete button click.
pub(crate) fn handle_delete_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    tasks::expenses::delete_expense(state, event_tx, id);
}

/// Attach a stored file to the open editor (deduplicated by URL).
pub(crate) fn handle_attach_file(state: Arc<RwLock<AppState>>, file: &StoredFile) {
    let url = state.read().api.download_url(&file.key);
    let mut state = state.write();
    if let Some(editor) = &mut state.expenses.editor {
        if !editor.attachments.iter().any(|a| a.url == url) {
            editor.attachments.push(Attachment {
                name: file.original_filename.clone(),
                url,
            });
        }
    }
}

/// Remove an attachment from the open editor.
pub(crate) fn handle_remove_attachment(state: Arc<RwLock<AppState>>, index: usize) {
    let mut state = state.write();
    if let Some(editor) = &mut state.expenses.editor {
        if index < editor.attachments.len() {
            editor.attachments.remove(index);
        }
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

    fn editor_form(amount: &str, category: &str) -> ExpenseForm {
        ExpenseForm {
            expense_date: "2026-07-14".to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            ..ExpenseForm::default()
        }
    }

    #[test]
    fn non_positive_amount_never_issues_a_network_call() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api.clone());
        state.write().expenses.editor = Some(editor_form("-10", "food"));
        let (tx, _rx) = async_channel::unbounded();

        handle_save_click(state.clone(), tx);

        assert_eq!(api.call_count(), 0);
        let state = state.read();
        assert!(!state.expenses.saving);
        let editor = state.expenses.editor.as_ref().unwrap();
        assert!(editor.errors.amount.is_some());
        assert!(editor.errors.category.is_none());
        assert!(editor.errors.expense_date.is_none());
    }

    #[test]
    fn empty_category_error_lands_on_the_category_field() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api.clone());
        state.write().expenses.editor = Some(editor_form("12.50", "  "));
        let (tx, _rx) = async_channel::unbounded();

        handle_save_click(state.clone(), tx);

        assert_eq!(api.call_count(), 0);
        let state = state.read();
        let editor = state.expenses.editor.as_ref().unwrap();
        assert!(editor.errors.category.is_some());
        assert!(editor.errors.amount.is_none());
    }

    #[test]
    fn attachments_deduplicate_by_url() {
        let api = Arc::new(FakeBackend::new());
        let state = test_state(api);
        state.write().expenses.editor = Some(editor_form("5", "food"));

        let file = StoredFile {
            key: "k-1".to_string(),
            size: 10,
            last_modified: chrono::Utc::now(),
            etag: "etag".to_string(),
            original_filename: "receipt.pdf".to_string(),
        };
        handle_attach_file(state.clone(), &file);
        handle_attach_file(state.clone(), &file);

        let state = state.read();
        let editor = state.expenses.editor.as_ref().unwrap();
        assert_eq!(editor.attachments.len(), 1);
        assert_eq!(editor.attachments[0].name, "receipt.pdf");
    }
}
