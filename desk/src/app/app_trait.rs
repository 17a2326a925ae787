//! # App Trait
//!
//! The actions screen renderers may trigger. Screens take `&mut impl AppLike`
//! rather than the concrete [`crate::app::App`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::{AppState, Page};

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Auth methods
    fn handle_login_click(&mut self, username: String, password: String);
    fn handle_signup_click(&mut self, username: String, email: String, password: String);
    fn handle_switch_to_login(&mut self);
    fn handle_switch_to_signup(&mut self);
    fn handle_logout(&mut self);

    // Navigation
    fn navigate_to(&mut self, page: Page) -> Page;

    // Student actions
    fn handle_search_change(&mut self, query: String);
    fn handle_add_student_submit(&mut self);
    fn handle_delete_click(&mut self, id: i64);
    fn handle_delete_confirm(&mut self);
    fn handle_delete_cancel(&mut self);
    fn handle_edit_click(&mut self, id: i64);
}
