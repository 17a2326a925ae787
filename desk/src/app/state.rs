//! # Application State
//!
//! The single store behind every page: routing, session, the cached student
//! list, form contents, and notifications waiting to be shown.

use shared::{Student, StudentPayload, UserInfo};

use crate::core::config::BackendMode;

/// Application page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Login / signup
    Login,
    /// Summary statistics
    Dashboard,
    /// Searchable student table
    Students,
    /// New student form
    AddStudent,
    /// Breakdown by course and semester
    Analytics,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Login,
            Page::Dashboard,
            Page::Students,
            Page::AddStudent,
            Page::Analytics,
        ]
    }

    /// Pages listed in the navigation bar, in order
    pub fn nav_pages() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Students,
            Page::AddStudent,
            Page::Analytics,
        ]
    }

    /// Get page title for header and nav display
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
            Page::Students => "Students",
            Page::AddStudent => "Add Student",
            Page::Analytics => "Analytics",
        }
    }

    /// Stable identifier (`add-student` etc.)
    pub fn id(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::Students => "students",
            Page::AddStudent => "add-student",
            Page::Analytics => "analytics",
        }
    }

    /// Every page except Login needs a logged-in user
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Login)
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Login form
    Login { username: String, password: String },
    /// Signup form
    Signup {
        username: String,
        email: String,
        password: String,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            username: String::new(),
            password: String::new(),
        }
    }

    pub fn signup() -> Self {
        AuthState::Signup {
            username: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn is_signup(&self) -> bool {
        matches!(self, AuthState::Signup { .. })
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::login()
    }
}

/// Add-student form contents as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub course: String,
    pub semester: String,
    pub phone: String,
    pub address: String,
}

impl StudentForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the request body. Call after validation; the semester is parsed
    /// here and blank optional fields are dropped.
    pub fn to_payload(&self) -> Option<StudentPayload> {
        let semester = self.semester.trim().parse::<u8>().ok()?;
        Some(StudentPayload {
            name: self.name.trim().to_string(),
            email: non_blank(&self.email),
            course: self.course.trim().to_string(),
            semester,
            phone: non_blank(&self.phone),
            address: non_blank(&self.address),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Message waiting to be shown as a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active page
    pub current_page: Page,
    /// Auth form state
    pub auth: AuthState,
    /// True while a login/signup request is in flight
    pub auth_pending: bool,
    /// Logged-in user (None when logged out)
    pub current_user: Option<UserInfo>,
    /// Token issued at login, if the backend issues one
    pub auth_token: Option<String>,
    /// Which backend is active (drives the demo hint)
    pub backend_mode: BackendMode,
    /// Last fetched student list
    pub students: Vec<Student>,
    pub students_loading: bool,
    /// Sequence number of the newest students request
    pub students_request_seq: u64,
    /// Students page search box
    pub search_query: String,
    pub student_form: StudentForm,
    pub student_form_pending: bool,
    /// Student id awaiting delete confirmation
    pub pending_delete: Option<i64>,
    /// Notifications not yet handed to the toast layer
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(backend_mode: BackendMode) -> Self {
        Self {
            current_page: Page::Login,
            auth: AuthState::login(),
            auth_pending: false,
            current_user: None,
            auth_token: None,
            backend_mode,
            students: Vec::new(),
            students_loading: false,
            students_request_seq: 0,
            search_query: String::new(),
            student_form: StudentForm::default(),
            student_form_pending: false,
            pending_delete: None,
            pending_notifications: Vec::new(),
        }
    }

    /// Check if a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Issue the next students request sequence number
    pub fn next_students_request(&mut self) -> u64 {
        self.students_request_seq += 1;
        self.students_request_seq
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    /// Take notifications queued since the last call
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending_notifications)
    }

    /// Drop everything tied to the logged-in user
    pub fn clear_session(&mut self) {
        self.current_user = None;
        self.auth_token = None;
        self.auth = AuthState::login();
        self.students.clear();
        self.students_loading = false;
        self.search_query.clear();
        self.student_form.clear();
        self.pending_delete = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BackendMode::Remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_are_unique() {
        let ids: std::collections::HashSet<&str> = Page::all().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), Page::all().len());
        assert_eq!(Page::AddStudent.id(), "add-student");
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(!Page::Login.requires_auth());
        assert!(Page::nav_pages().iter().all(|p| p.requires_auth()));
    }

    #[test]
    fn test_form_payload_drops_blank_optionals() {
        let form = StudentForm {
            name: " Ana ".to_string(),
            email: "  ".to_string(),
            course: "MBA".to_string(),
            semester: "2".to_string(),
            phone: "555-0100".to_string(),
            address: String::new(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, None);
        assert_eq!(payload.phone.as_deref(), Some("555-0100"));
        assert_eq!(payload.semester, 2);
    }

    #[test]
    fn test_request_sequence_increases() {
        let mut state = AppState::default();
        let first = state.next_students_request();
        let second = state.next_students_request();
        assert!(second > first);
        assert_eq!(state.students_request_seq, second);
    }

    #[test]
    fn test_drain_notifications_empties_queue() {
        let mut state = AppState::default();
        state.notify(NotificationLevel::Info, "hello");
        assert_eq!(state.drain_notifications().len(), 1);
        assert!(state.drain_notifications().is_empty());
    }
}
