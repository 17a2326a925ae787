//! # Event Handler
//!
//! Applies results from background tasks to the application state.
//! Runs on the UI thread; each handler takes the write lock only briefly.

use shared::Student;

use crate::app::state::{AuthState, NotificationLevel, Page};
use crate::app::{handlers, App, AppEvent};
use crate::core::error::ApiError;
use crate::services::session::Session;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(event = event.kind(), "Handling event");

        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::SignupResult(result) => self.handle_signup_result(result),
            AppEvent::StudentsLoaded { seq, result } => self.handle_students_loaded(seq, result),
            AppEvent::StudentCreated(result) => self.handle_student_created(result),
            AppEvent::StudentDeleted { id, result } => self.handle_student_deleted(id, result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<Session, ApiError>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        match result {
            Ok(session) => {
                if let Err(e) = self.session.persist(&session) {
                    tracing::warn!(error = %e, "Could not persist session; continuing logged in");
                }

                {
                    let mut state = self.state.write();
                    state.auth_pending = false;
                    state.auth = AuthState::login();
                    state.current_user = Some(session.user);
                    state.auth_token = session.auth_token;
                    state.notify(NotificationLevel::Success, "Login successful!");
                }
                self.navigate_to(Page::Dashboard);
            }
            Err(err) => {
                let mut state = self.state.write();
                state.auth_pending = false;
                state.notify(NotificationLevel::Error, err.to_string());
            }
        }
    }

    fn handle_signup_result(&mut self, result: Result<String, ApiError>) {
        tracing::info!(event = "SignupResult", success = result.is_ok(), "Processing signup result");
        let mut state = self.state.write();
        state.auth_pending = false;

        match result {
            Ok(_) => {
                state.auth = AuthState::login();
                state.notify(NotificationLevel::Success, "Account created! Please log in.");
            }
            Err(err) => state.notify(NotificationLevel::Error, err.to_string()),
        }
    }

    fn handle_students_loaded(&mut self, seq: u64, result: Result<Vec<Student>, ApiError>) {
        let mut state = self.state.write();

        if seq != state.students_request_seq {
            tracing::debug!(
                seq,
                latest = state.students_request_seq,
                "Dropping superseded students response"
            );
            return;
        }

        state.students_loading = false;
        match result {
            Ok(students) => {
                tracing::debug!(seq, count = students.len(), "Students updated");
                state.students = students;
            }
            Err(err) => {
                state.students.clear();
                state.notify(NotificationLevel::Error, err.to_string());
            }
        }
    }

    fn handle_student_created(&mut self, result: Result<Option<Student>, ApiError>) {
        tracing::info!(event = "StudentCreated", success = result.is_ok(), "Processing create result");

        match result {
            Ok(_) => {
                {
                    let mut state = self.state.write();
                    state.student_form_pending = false;
                    state.student_form.clear();
                    state.notify(NotificationLevel::Success, "Student added successfully");
                }
                self.navigate_to(Page::Students);
            }
            Err(err) => {
                let mut state = self.state.write();
                state.student_form_pending = false;
                state.notify(NotificationLevel::Error, err.to_string());
            }
        }
    }

    fn handle_student_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        tracing::info!(event = "StudentDeleted", id, success = result.is_ok(), "Processing delete result");

        match result {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.students.retain(|s| s.id != id);
                    state.notify(NotificationLevel::Success, "Student deleted successfully");
                }
                handlers::navigation::reload_current_page(&self.state, &self.backend, &self.event_tx);
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Delete failed");
                self.state
                    .write()
                    .notify(NotificationLevel::Error, "Failed to delete student");
            }
        }
    }
}
