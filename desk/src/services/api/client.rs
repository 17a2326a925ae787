//! # API Client
//!
//! HTTP client for the student records REST backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{Student, StudentPayload};

use crate::core::config::{AppConfig, BackendMode, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::core::error::{ApiError, ApiResult};
use crate::core::service::StudentService;
use crate::services::session::Session;

/// HTTP client for communicating with the backend API server.
///
/// Holds one connection pool for the whole session.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (for example `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    /// Full URL for an API path such as `/students/3`
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

/// Map a transport failure to [`ApiError::Network`], logging the cause.
pub(crate) fn network_error(operation: &'static str) -> impl Fn(reqwest::Error) -> ApiError {
    move |e| {
        tracing::error!(error = %e, operation, "Network error");
        ApiError::Network
    }
}

/// Decode a JSON body regardless of status; an unreadable body counts as a
/// network failure.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    operation: &'static str,
) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!(error = %e, operation, "Response parse error");
        ApiError::Network
    })
}

#[async_trait]
impl StudentService for ApiClient {
    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }

    async fn login(&self, username: String, password: String) -> ApiResult<Session> {
        super::auth::login(self, username, password).await
    }

    async fn signup(&self, username: String, email: String, password: String) -> ApiResult<String> {
        super::auth::signup(self, username, email, password).await
    }

    async fn list_students(&self, search: &str) -> ApiResult<Vec<Student>> {
        super::students::list_students(self, search).await
    }

    async fn create_student(&self, payload: StudentPayload) -> ApiResult<Option<Student>> {
        super::students::create_student(self, payload).await
    }

    async fn update_student(&self, id: i64, payload: StudentPayload) -> ApiResult<Option<Student>> {
        super::students::update_student(self, id, payload).await
    }

    async fn delete_student(&self, id: i64) -> ApiResult<()> {
        super::students::delete_student(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/api/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/students/7"), "http://localhost:8080/api/students/7");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let client = ApiClient::default();
        assert_eq!(client.url("/auth/login"), "http://localhost:8080/api/auth/login");
        assert_eq!(client.mode(), BackendMode::Remote);
    }
}
