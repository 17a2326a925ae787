//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default log directory
pub const DEFAULT_LOG_DIR: &str = "logs";
/// Default `EnvFilter` directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "desk=info,warn";
/// Rolling log file name prefix
pub const LOG_FILE_NAME: &str = "desk.log";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (daily rotation happens inside it)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "desk=debug,info")
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_dir: non_empty("DESK_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_level: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Full path of today's log file prefix
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DebugConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("desk.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_env_overrides() {
        let config = DebugConfig::from_lookup(lookup(&[
            ("DESK_LOG_DIR", "/tmp/desk-logs"),
            ("RUST_LOG", "desk=debug"),
        ]));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/desk-logs"));
        assert_eq!(config.log_level, "desk=debug");
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = DebugConfig::from_lookup(lookup(&[("DESK_LOG_DIR", "  "), ("RUST_LOG", "")]));
        assert_eq!(config, DebugConfig::default());
    }
}
