//! Application configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

use super::error::{AppError, Result};

/// Default REST API root
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
/// Default session file (the desk's equivalent of browser local storage)
pub const DEFAULT_SESSION_FILE: &str = "./desk-session.json";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which backend the desk talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// REST API at [`AppConfig::api_url`]
    Remote,
    /// Built-in demo data; any non-empty credentials log in
    Demo,
}

impl BackendMode {
    /// Parse a `DESK_BACKEND` value
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" | "api" => Ok(BackendMode::Remote),
            "demo" => Ok(BackendMode::Demo),
            other => Err(AppError::Config(format!(
                "DESK_BACKEND must be 'remote' or 'demo', got '{}'",
                other
            ))),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// REST API root, without trailing slash (`DESK_API_URL`)
    pub api_url: String,
    /// Backend selection (`DESK_BACKEND`)
    pub backend: BackendMode,
    /// Session storage file (`DESK_SESSION_FILE`)
    pub session_file: PathBuf,
    /// Per-request timeout (`DESK_REQUEST_TIMEOUT_SECS`)
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            backend: BackendMode::Remote,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults; present but invalid values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("DESK_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let backend = match lookup("DESK_BACKEND") {
            Some(value) => BackendMode::parse(&value)?,
            None => defaults.backend,
        };

        let session_file = lookup("DESK_SESSION_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        let request_timeout = match lookup("DESK_REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|_| {
                    AppError::Config(format!(
                        "DESK_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        value
                    ))
                })?;
                Duration::from_secs(secs.max(1))
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_url,
            backend,
            session_file,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.backend, BackendMode::Remote);
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DESK_API_URL", "http://10.0.0.5:9000/api/"),
            ("DESK_BACKEND", "Demo"),
            ("DESK_SESSION_FILE", "/tmp/desk.json"),
            ("DESK_REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.backend, BackendMode::Demo);
        assert_eq!(config.session_file, PathBuf::from("/tmp/desk.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_backend_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("DESK_BACKEND", "mainframe")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("DESK_REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
