//! # Async Tasks
//!
//! Async task spawning for backend requests.

pub mod students;
