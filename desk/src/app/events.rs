//! # Application Events
//!
//! Results sent from background tasks to the UI thread.

use shared::Student;

use crate::core::error::ApiError;
use crate::services::session::Session;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<Session, ApiError>),
    /// Signup completed (server message on success)
    SignupResult(Result<String, ApiError>),
    /// Student list fetched; `seq` identifies the request
    StudentsLoaded {
        seq: u64,
        result: Result<Vec<Student>, ApiError>,
    },
    /// Create request completed
    StudentCreated(Result<Option<Student>, ApiError>),
    /// Delete request completed
    StudentDeleted { id: i64, result: Result<(), ApiError> },
}

impl AppEvent {
    /// Short event name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::SignupResult(_) => "SignupResult",
            AppEvent::StudentsLoaded { .. } => "StudentsLoaded",
            AppEvent::StudentCreated(_) => "StudentCreated",
            AppEvent::StudentDeleted { .. } => "StudentDeleted",
        }
    }
}
