//! # Common Error Types
//!
//! Consolidated error handling for the desk application.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: what a backend call can fail with. Transport failures collapse
//!   into [`ApiError::Network`] so callers only ever show the message string.
//! - [`AppError`]: application-wide error covering API, storage, configuration
//!   and runtime state failures.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use desk::core::error::{AppError, Result};
//!
//! fn backend_name(value: &str) -> Result<&str> {
//!     if value.trim().is_empty() {
//!         return Err(AppError::Config("DESK_BACKEND is empty".to_string()));
//!     }
//!     Ok(value)
//! }
//! ```

use thiserror::Error;

/// Failure of a single backend call.
///
/// `Display` is the user-facing message: `"Network error"` for anything the
/// transport or decoding layer rejected, otherwise the server's own message.
///
/// ```rust
/// use desk::core::error::ApiError;
///
/// assert_eq!(ApiError::Network.to_string(), "Network error");
/// assert_eq!(ApiError::rejected(None, "Login failed").to_string(), "Login failed");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, timeout, non-JSON or undecodable body
    #[error("Network error")]
    Network,

    /// Application-level rejection (`success: false`)
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Build a rejection from an optional server message and a fallback.
    pub fn rejected(message: Option<String>, fallback: &str) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => ApiError::Rejected(msg),
            _ => ApiError::Rejected(fallback.to_string()),
        }
    }
}

/// Result of a backend call
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Application-wide error type.
///
/// Each variant includes a descriptive message; `thiserror` provides `Display`.
///
/// ```rust
/// use desk::core::error::AppError;
///
/// let err = AppError::Config("DESK_BACKEND must be remote or demo".to_string());
/// assert_eq!(err.to_string(), "Config error: DESK_BACKEND must be remote or demo");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Session storage read/write failure (I/O or malformed JSON)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Application state management error
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_fallback_for_blank_message() {
        assert_eq!(
            ApiError::rejected(Some("  ".to_string()), "Signup failed"),
            ApiError::Rejected("Signup failed".to_string())
        );
        assert_eq!(
            ApiError::rejected(Some("Username already exists".to_string()), "Signup failed"),
            ApiError::Rejected("Username already exists".to_string())
        );
    }

    #[test]
    fn test_api_error_converts_into_app_error() {
        let err: AppError = ApiError::Network.into();
        assert_eq!(err.to_string(), "API error: Network error");
    }
}
