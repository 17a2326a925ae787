//! Process-wide Tokio runtime
//!
//! eframe owns the main thread and drives the UI loop synchronously, while
//! reqwest needs a Tokio reactor. The runtime is created once, entered from
//! `main`, and lives for the whole process so `tokio::spawn` works from UI
//! callbacks.
//!
//! ```rust,no_run
//! use desk::utils::runtime;
//!
//! let rt = runtime::get().expect("runtime");
//! let _guard = rt.enter();
//! ```

use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;

use crate::core::error::{AppError, Result};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Get the shared runtime, creating it on first use.
pub fn get() -> Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("desk-worker")
            .build()
            .map_err(|e| AppError::State(format!("Failed to create Tokio runtime: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_is_shared() {
        let a = get().unwrap() as *const Runtime;
        let b = get().unwrap() as *const Runtime;
        assert_eq!(a, b);
        assert_eq!(get().unwrap().block_on(async { 40 + 2 }), 42);
    }
}
