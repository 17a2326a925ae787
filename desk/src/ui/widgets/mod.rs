//! # Reusable Widgets
//!
//! Building blocks shared by the screens.

pub mod forms;
pub mod nav_bar;
pub mod notifications;
pub mod tables;
