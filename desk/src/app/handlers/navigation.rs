//! # Navigation Handlers
//!
//! Page routing with the authentication guard.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Page};
use crate::app::tasks;
use crate::core::service::StudentService;

/// Switch to `page`, redirecting to Login when the user is not authenticated,
/// then start the page's data load. Returns the page actually shown.
///
/// Internal handler function - use [`crate::app::App::navigate_to`] instead.
pub(crate) fn navigate_to(
    state: &Arc<RwLock<AppState>>,
    backend: &Arc<dyn StudentService>,
    event_tx: &Sender<AppEvent>,
    page: Page,
) -> Page {
    let (target, fetch) = {
        let mut state = state.write();

        let target = if page.requires_auth() && !state.is_authenticated() {
            tracing::info!(
                requested = page.id(),
                "Access denied: page requires authentication, redirecting to Login"
            );
            Page::Login
        } else {
            page
        };

        state.current_page = target;
        state.pending_delete = None;
        if target == Page::AddStudent {
            state.student_form.clear();
        }

        (target, begin_page_load(&mut state))
    };

    tracing::debug!(page = target.id(), "Navigated");

    if let Some((seq, search)) = fetch {
        tasks::students::fetch_students(backend.clone(), event_tx.clone(), seq, search);
    }
    target
}

/// Re-run the current page's students load, if it has one.
///
/// Does nothing once the user has logged out.
pub(crate) fn reload_current_page(
    state: &Arc<RwLock<AppState>>,
    backend: &Arc<dyn StudentService>,
    event_tx: &Sender<AppEvent>,
) {
    let fetch = {
        let mut state = state.write();
        if !state.is_authenticated() {
            return;
        }
        begin_page_load(&mut state)
    };

    if let Some((seq, search)) = fetch {
        tasks::students::fetch_students(backend.clone(), event_tx.clone(), seq, search);
    }
}

/// Search for the current page's load, with a fresh request sequence.
fn begin_page_load(state: &mut AppState) -> Option<(u64, String)> {
    let search = match state.current_page {
        Page::Dashboard | Page::Analytics => String::new(),
        Page::Students => state.search_query.clone(),
        Page::AddStudent | Page::Login => return None,
    };
    state.students_loading = true;
    Some((state.next_students_request(), search))
}
