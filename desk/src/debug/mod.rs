//! # Logging Infrastructure
//!
//! Structured logging for the desk via `tracing`.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/desk.log` with daily rotation
//! - **Console logging**: same events on stdout
//! - **Panic capture**: panics are logged before the default hook runs
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `desk=debug,info`)
//! - `DESK_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment
///
/// Call this at application startup, before any other operations, and hold
/// the returned guard until exit.
pub fn init() -> Option<WorkerGuard> {
    logger::init(&DebugConfig::from_env())
}
