//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, signup, and user information
//! - [`student`] - Student records, create/update payloads, response envelope
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "username": "alice", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "message": "Login successful",
//!   "user": { "id": 1, "username": "alice", "email": "alice@example.com", "role": "USER" }
//! }
//! ```

pub mod auth;
pub mod student;

pub use auth::*;
pub use student::*;
