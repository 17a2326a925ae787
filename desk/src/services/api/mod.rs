//! # Backend API Client Module
//!
//! HTTP client for the student records REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, shared response handling, StudentService impl
//! ├── auth.rs      - Authentication endpoints (login, signup)
//! └── students.rs  - Student endpoints (list, create, update, delete)
//! ```

pub mod auth;
pub mod client;
pub mod students;

pub use client::ApiClient;
