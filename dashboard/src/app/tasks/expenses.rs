//! # Expense Tasks
//!
//! Async fetch/save/delete against the expense endpoints.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use shared::ExpensePayload;

/// Reload the expense list for the current day window.
///
/// Bumps the reload id so that overlapping reloads resolve
/// last-request-wins: the event carries the id the request was issued with
/// and the event handler drops anything stale.
pub(crate) fn load_expenses(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, seq, days) = {
        let mut state = state.write();
        state.expenses.reload_seq += 1;
        state.expenses.loading = true;
        (state.api.clone(), state.expenses.reload_seq, state.days_window)
    };

    TOKIO_RT.spawn(async move {
        let result = api.list_expenses(days).await;
        let _ = event_tx.send(AppEvent::ExpensesLoaded { seq, result }).await;
    });
}

/// Create or update an expense, depending on whether `id` is set.
pub(crate) fn save_expense(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: Option<String>,
    payload: ExpensePayload,
) {
    let api = state.read().api.clone();

    TOKIO_RT.spawn(async move {
        let result = match id {
            Some(id) => api.update_expense(&id, payload).await,
            None => api.create_expense(payload).await,
        };
        let _ = event_tx.send(AppEvent::ExpenseSaved(result)).await;
    });
}

/// Delete an expense by id.
pub(crate) fn delete_expense(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    let api = state.read().api.clone();

    TOKIO_RT.spawn(async move {
        let result = api.delete_expense(&id).await;
        let _ = event_tx.send(AppEvent::ExpenseDeleted { id, result }).await;
    });
}
