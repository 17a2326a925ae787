//! # Student Management System Desk - Library Root
//!
//! A **native desktop GUI** for managing student records.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Authentication**: login and signup against the REST API, or a demo
//!   mode that accepts any non-empty credentials
//! - **Persistent session**: the logged-in user survives restarts
//! - **Student records**: searchable list, add form, delete with confirmation
//! - **Dashboard and analytics**: totals and per-course / per-semester counts
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              desk (this crate)                         │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────┐
//! │  Student API    │   or the in-process demo backend
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: state, events, routing and user action handlers
//! - **core**: configuration, error types, the `StudentService` trait
//! - **debug**: logging setup
//! - **services**: REST client, demo backend, session storage
//! - **ui**: headless view model, screens, widgets, theme, window
//! - **utils**: Tokio runtime, form validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, input handling)
//!   │   ├── services::api / services::demo (StudentService)
//!   │   └── services::session (persisted login)
//!   │
//!   └── ui (rendering)
//!       ├── view (headless View built from AppState)
//!       ├── screens::* (auth, dashboard, students, add_student, analytics)
//!       ├── widgets::* (forms, tables, nav bar, toasts)
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! Background tasks report back over an **async channel**:
//! - Main thread: input and rendering
//! - Async tasks: backend calls on the shared Tokio runtime
//!
//! Results flow back to the main thread as `AppEvent`s, applied in
//! `App::on_tick`.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>` and locked only
//! for the duration of a single update.
//!
//! ## Usage
//!
//! ```bash
//! DESK_BACKEND=demo cargo run --bin desk
//! ```
//!
//! ### As a Library (for testing)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use desk::app::{App, Page};
//! use desk::services::{demo::DemoBackend, session::MemoryStorage};
//!
//! # async fn demo() -> desk::Result<()> {
//! let app = App::with_services(Arc::new(DemoBackend::new()), Box::new(MemoryStorage::default()))?;
//! assert_eq!(app.state.read().current_page, Page::Login);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Page};
pub use core::{AppError, Result};
