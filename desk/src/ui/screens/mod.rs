//! # Screen Modules
//!
//! One module per page. Each renders a view snapshot built by
//! [`crate::ui::view::build_view`] and reports user actions through
//! [`crate::app::AppLike`].
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, view: &StudentsView, app: &mut impl AppLike, theme: &Theme) {
//!     // - Read from the view (no locks held while painting)
//!     // - Call app.handle_* / app.navigate_to for actions
//! }
//! ```
//!
//! - **[`auth`]**: login and signup forms
//! - **[`dashboard`]**: stat cards and quick actions
//! - **[`students`]**: searchable table with delete confirmation
//! - **[`add_student`]**: new student form
//! - **[`analytics`]**: distribution tables

pub mod add_student;
pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod students;
