//! # Service Traits
//!
//! Traits for dependency injection, so the application runs against either the
//! REST backend or the built-in demo backend, and tests can swap in either.

use async_trait::async_trait;
use shared::{Student, StudentPayload};

use super::config::BackendMode;
use super::error::ApiResult;
use crate::services::session::Session;

/// Student records backend.
///
/// Every call issues one request and returns a normalized result: transport
/// failures become [`crate::core::ApiError::Network`], server rejections carry
/// the server's message.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Which backend this is (drives the demo hint on the login screen)
    fn mode(&self) -> BackendMode;

    /// Log in and obtain a session
    async fn login(&self, username: String, password: String) -> ApiResult<Session>;

    /// Create an account; returns the server's confirmation message
    async fn signup(&self, username: String, email: String, password: String) -> ApiResult<String>;

    /// List students, filtered by `search` when non-empty
    async fn list_students(&self, search: &str) -> ApiResult<Vec<Student>>;

    /// Create a student; the server may echo the stored record
    async fn create_student(&self, payload: StudentPayload) -> ApiResult<Option<Student>>;

    /// Replace a student's fields by id
    async fn update_student(&self, id: i64, payload: StudentPayload) -> ApiResult<Option<Student>>;

    /// Delete a student by id
    async fn delete_student(&self, id: i64) -> ApiResult<()>;
}
