//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};

/// Initialize the logging system
///
/// Sets up:
/// - Console output for interactive runs
/// - Daily rotated log file in `DESK_LOG_DIR` with non-blocking writes
/// - Panic hook that routes panics into the log
///
/// Returns the appender guard; dropping it flushes and closes the file
/// writer, so keep it alive for the lifetime of the program. When the log
/// directory cannot be created only console logging is installed and `None`
/// is returned.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let console_layer = fmt::layer().with_target(true);

    let guard = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(config.is_debug_enabled())
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files

            let result = tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .try_init();
            if let Err(e) = result {
                eprintln!("Warning: tracing subscriber already installed: {}", e);
            }
            Some(guard)
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory: {}", e);
            let result = tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .try_init();
            if let Err(e) = result {
                eprintln!("Warning: tracing subscriber already installed: {}", e);
            }
            None
        }
    };

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        file_logging = guard.is_some(),
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
