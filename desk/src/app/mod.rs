//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI layer, background requests, and
//! application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick()      drains the event channel           │   │
//! │  │  - handle_*()     user actions from the screens      │   │
//! │  │  - view()         headless snapshot for rendering    │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - login / signup                                           │
//! │  - fetch / create / delete students                         │
//! │      via Arc<dyn StudentService>                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: orchestrator with event handling
//! - **[`AppState`]**: application state (see [`state`] module)
//! - **[`AppEvent`]**: async task results (see [`events`] module)
//! - **handlers**: user action handlers (auth, navigation, students)
//! - **tasks**: background requests
//!
//! Locks on the state are held only for the duration of a single update.

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::core::service::StudentService;
use crate::services::session::{FileStorage, SessionStorage, SessionStore};
use crate::ui::view::{build_view, View};

/// Main application orchestrator.
///
/// Owns the state, the backend, and the session store. Screens call the
/// `handle_*` methods; background tasks report through [`AppEvent`]s that
/// [`App::on_tick`] applies on the UI thread.
///
/// Must be created inside a Tokio runtime context: a restored session starts
/// loading the dashboard immediately.
pub struct App {
    /// Shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    backend: Arc<dyn StudentService>,

    session: SessionStore,
}

impl App {
    /// Create the application from configuration: the configured backend and
    /// the session file at `config.session_file`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let backend = crate::services::backend_for(config);
        let storage = FileStorage::open_or_reset(config.session_file.clone());
        tracing::info!(path = %storage.path().display(), "Session storage ready");
        Self::with_services(backend, Box::new(storage))
    }

    /// Create the application over explicit services.
    ///
    /// A stored session is restored and lands on the Dashboard; otherwise the
    /// app starts on Login.
    pub fn with_services(
        backend: Arc<dyn StudentService>,
        storage: Box<dyn SessionStorage>,
    ) -> Result<Self> {
        let session = SessionStore::new(storage);
        let restored = session.restore()?;

        let mut state = AppState::new(backend.mode());
        if let Some(restored) = &restored {
            state.current_user = Some(restored.user.clone());
            state.auth_token = restored.auth_token.clone();
        }

        let (event_tx, event_rx) = unbounded();
        let mut app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            backend,
            session,
        };

        match restored {
            Some(restored) => {
                tracing::info!(username = %restored.user.username, "Restored saved session");
                app.navigate_to(Page::Dashboard);
            }
            None => tracing::info!("No saved session, starting at login"),
        }

        Ok(app)
    }

    /// Called every frame: apply every pending async result.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::trace!(processed, "on_tick processed events");
        }
        processed
    }

    /// Apply one async result to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Headless description of what the window should show right now.
    pub fn view(&self) -> View {
        build_view(&self.state.read())
    }

    /// Take notifications queued since the last frame.
    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.state.write().drain_notifications()
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Route to `page` through the authentication guard.
    pub fn navigate_to(&mut self, page: Page) -> Page {
        handlers::navigation::navigate_to(&self.state, &self.backend, &self.event_tx, page)
    }

    /// Handle login button click
    pub fn handle_login_click(&mut self, username: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.backend.clone(),
            self.event_tx.clone(),
            username,
            password,
        );
    }

    /// Handle signup button click
    pub fn handle_signup_click(&mut self, username: String, email: String, password: String) {
        handlers::auth::handle_signup_click(
            self.state.clone(),
            self.backend.clone(),
            self.event_tx.clone(),
            username,
            email,
            password,
        );
    }

    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_signup(&mut self) {
        handlers::auth::handle_switch_to_signup(self.state.clone());
    }

    /// Clear the session everywhere and return to Login.
    pub fn handle_logout(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Could not clear stored session");
        }

        {
            let mut state = self.state.write();
            tracing::info!(
                username = state.current_user.as_ref().map(|u| u.username.as_str()).unwrap_or(""),
                "Logging out"
            );
            state.clear_session();
            // Invalidate any students request still in flight
            state.next_students_request();
        }

        self.navigate_to(Page::Login);
        self.state
            .write()
            .notify(NotificationLevel::Success, "Logged out successfully");
    }

    pub fn handle_search_change(&mut self, query: String) {
        handlers::students::handle_search_change(&self.state, &self.backend, &self.event_tx, query);
    }

    pub fn handle_add_student_submit(&mut self) {
        handlers::students::handle_add_student_submit(&self.state, &self.backend, &self.event_tx);
    }

    pub fn handle_delete_click(&mut self, id: i64) {
        handlers::students::handle_delete_click(&self.state, id);
    }

    pub fn handle_delete_confirm(&mut self) {
        handlers::students::handle_delete_confirm(&self.state, &self.backend, &self.event_tx);
    }

    pub fn handle_delete_cancel(&mut self) {
        handlers::students::handle_delete_cancel(&self.state);
    }

    pub fn handle_edit_click(&mut self, id: i64) {
        handlers::students::handle_edit_click(&self.state, id);
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_login_click(&mut self, username: String, password: String) {
        App::handle_login_click(self, username, password);
    }

    fn handle_signup_click(&mut self, username: String, email: String, password: String) {
        App::handle_signup_click(self, username, email, password);
    }

    fn handle_switch_to_login(&mut self) {
        App::handle_switch_to_login(self);
    }

    fn handle_switch_to_signup(&mut self) {
        App::handle_switch_to_signup(self);
    }

    fn handle_logout(&mut self) {
        App::handle_logout(self);
    }

    fn navigate_to(&mut self, page: Page) -> Page {
        App::navigate_to(self, page)
    }

    fn handle_search_change(&mut self, query: String) {
        App::handle_search_change(self, query);
    }

    fn handle_add_student_submit(&mut self) {
        App::handle_add_student_submit(self);
    }

    fn handle_delete_click(&mut self, id: i64) {
        App::handle_delete_click(self, id);
    }

    fn handle_delete_confirm(&mut self) {
        App::handle_delete_confirm(self);
    }

    fn handle_delete_cancel(&mut self) {
        App::handle_delete_cancel(self);
    }

    fn handle_edit_click(&mut self, id: i64) {
        App::handle_edit_click(self, id);
    }
}
