//! # Authentication Handlers
//!
//! Handlers for login, signup and switching between the auth forms.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, NotificationLevel};
use crate::core::service::StudentService;
use crate::utils::validation;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    backend: Arc<dyn StudentService>,
    event_tx: Sender<AppEvent>,
    username: String,
    password: String,
) {
    let check = validation::validate_login(&username, &password);
    if let Some(error) = check.error {
        state.write().notify(NotificationLevel::Error, error);
        return;
    }

    {
        let mut state = state.write();
        if state.auth_pending {
            tracing::debug!("Login already in flight");
            return;
        }
        state.auth_pending = true;
    }

    let username = username.trim().to_string();
    tokio::spawn(async move {
        let result = backend.login(username, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle signup button click
///
/// Internal handler function - use [`crate::app::App::handle_signup_click`] instead.
pub(crate) fn handle_signup_click(
    state: Arc<RwLock<AppState>>,
    backend: Arc<dyn StudentService>,
    event_tx: Sender<AppEvent>,
    username: String,
    email: String,
    password: String,
) {
    let check = validation::validate_signup(&username, &email, &password);
    if let Some(error) = check.error {
        state.write().notify(NotificationLevel::Error, error);
        return;
    }

    {
        let mut state = state.write();
        if state.auth_pending {
            return;
        }
        state.auth_pending = true;
    }

    let username = username.trim().to_string();
    let email = email.trim().to_string();
    tokio::spawn(async move {
        let result = backend.signup(username, email, password).await;
        let _ = event_tx.send(AppEvent::SignupResult(result)).await;
    });
}

/// Switch to login form
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_login`] instead.
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::login();
}

/// Switch to signup form
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_signup`] instead.
pub(crate) fn handle_switch_to_signup(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::signup();
}
