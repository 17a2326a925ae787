//! # Services Module
//!
//! Backends and persistence behind the application layer.
//!
//! ```text
//! services/
//! ├── api/        - REST client for the student records server
//! ├── demo.rs     - In-memory backend with seeded students
//! └── session.rs  - Session persistence (authToken / currentUser)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Desk window                 │
//! │                                              │
//! │        Arc<dyn StudentService>               │
//! │          │                   │               │
//! │   ┌──────┴──────┐     ┌──────┴──────┐        │
//! │   │  ApiClient  │     │ DemoBackend │        │
//! │   └──────┬──────┘     └─────────────┘        │
//! └──────────┼───────────────────────────────────┘
//!            │ HTTP/JSON
//!            ▼
//! ┌──────────────────────┐
//! │  REST backend        │
//! │  /api/auth/*         │
//! │  /api/students[/id]  │
//! └──────────────────────┘
//! ```
//!
//! Both backends implement [`crate::core::service::StudentService`]; the
//! configured [`crate::core::config::BackendMode`] picks one at startup.

pub mod api;
pub mod demo;
pub mod session;

use std::sync::Arc;

use crate::core::config::{AppConfig, BackendMode};
use crate::core::service::StudentService;

pub use api::ApiClient;
pub use demo::DemoBackend;
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};

/// Build the backend selected by `config`.
pub fn backend_for(config: &AppConfig) -> Arc<dyn StudentService> {
    match config.backend {
        BackendMode::Remote => {
            tracing::info!(api_url = %config.api_url, "Using REST backend");
            Arc::new(ApiClient::from_config(config))
        }
        BackendMode::Demo => {
            tracing::info!("Using demo backend");
            Arc::new(DemoBackend::new())
        }
    }
}
