//! # Utility Functions
//!
//! Shared utility functions used across the desk application.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Process-wide Tokio runtime
//! - **[`validation`]**: Form validation (login, signup, add-student)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate text helpers
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
