//! # Core Abstractions
//!
//! Core traits, configuration, and error types shared by every layer.
//!
//! ## Modules
//!
//! - **[`config`]**: Environment-driven configuration (`AppConfig`, `BackendMode`)
//! - **[`error`]**: Application error types (`AppError`, `ApiError`, `Result<T>`)
//! - **[`service`]**: Backend trait for dependency injection (`StudentService`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use desk::core::service::StudentService;
//! use desk::services::demo::DemoBackend;
//!
//! // The window uses whatever the config selects; tests pick the demo backend.
//! let backend: Arc<dyn StudentService> = Arc::new(DemoBackend::new());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::{AppConfig, BackendMode};
pub use error::{ApiError, ApiResult, AppError, Result};
pub use service::StudentService;
