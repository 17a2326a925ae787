//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the desk client and the student
//! records REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, signup, and user DTOs
//!   - **[`dto::student`]**: Student records and mutation envelopes
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::truncate_text`]**: Shorten long cell values for table display
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON and wraps every mutation in a
//! `{ "success": bool, "message": "..." }` envelope ([`ApiResponse`]).
//! Optional fields are omitted from JSON when `None`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::student::{Student, StudentPayload};
//!
//! let payload = StudentPayload::new("Jane Smith", "Electronics", 2);
//! let body = serde_json::to_string(&payload).unwrap();
//! assert!(body.contains("\"semester\":2"));
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
