//! # Student Handlers
//!
//! Search, add, delete and edit actions on the student pages.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks;
use crate::core::service::StudentService;
use crate::utils::validation;

/// Issue a new students request for `search`, superseding any in flight.
pub(crate) fn refresh_students(
    state: &Arc<RwLock<AppState>>,
    backend: &Arc<dyn StudentService>,
    event_tx: &Sender<AppEvent>,
    search: String,
) {
    let seq = {
        let mut state = state.write();
        state.students_loading = true;
        state.next_students_request()
    };
    tasks::students::fetch_students(backend.clone(), event_tx.clone(), seq, search);
}

/// Search box changed: store the query and fetch once per change.
pub(crate) fn handle_search_change(
    state: &Arc<RwLock<AppState>>,
    backend: &Arc<dyn StudentService>,
    event_tx: &Sender<AppEvent>,
    query: String,
) {
    {
        let mut state = state.write();
        if state.search_query == query {
            return;
        }
        state.search_query = query.clone();
    }
    refresh_students(state, backend, event_tx, query);
}

/// Validate the add-student form and submit it.
pub(crate) fn handle_add_student_submit(
    state: &Arc<RwLock<AppState>>,
    backend: &Arc<dyn StudentService>,
    event_tx: &Sender<AppEvent>,
) {
    let payload = {
        let mut state = state.write();
        if state.student_form_pending {
            return;
        }

        let check = validation::validate_student_form(&state.student_form);
        if let Some(error) = check.error {
            state.notify(NotificationLevel::Error, error);
            return;
        }

        match state.student_form.to_payload() {
            Some(payload) => {
                state.student_form_pending = true;
                payload
            }
            None => {
                state.notify(NotificationLevel::Error, validation::MISSING_FIELDS);
                return;
            }
        }
    };

    tracing::info!(name = %payload.name, course = %payload.course, "Submitting new student");
    tasks::students::create_student(backend.clone(), event_tx.clone(), payload);
}

/// Delete clicked on a row: ask for confirmation first.
pub(crate) fn handle_delete_click(state: &Arc<RwLock<AppState>>, id: i64) {
    state.write().pending_delete = Some(id);
}

/// Confirmation dialog accepted.
pub(crate) fn handle_delete_confirm(
    state: &Arc<RwLock<AppState>>,
    backend: &Arc<dyn StudentService>,
    event_tx: &Sender<AppEvent>,
) {
    let Some(id) = state.write().pending_delete.take() else {
        return;
    };
    tracing::info!(id, "Deleting student");
    tasks::students::delete_student(backend.clone(), event_tx.clone(), id);
}

pub(crate) fn handle_delete_cancel(state: &Arc<RwLock<AppState>>) {
    state.write().pending_delete = None;
}

/// Editing is not available yet.
pub(crate) fn handle_edit_click(state: &Arc<RwLock<AppState>>, id: i64) {
    tracing::debug!(id, "Edit requested");
    state
        .write()
        .notify(NotificationLevel::Warning, "Edit feature coming soon!");
}
