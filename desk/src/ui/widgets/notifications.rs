//! # Notifications Widget
//!
//! Toast notifications via egui-notify. Every toast disappears after five
//! seconds.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::{Notification, NotificationLevel};

pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Some(TOAST_DURATION));
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message).duration(Some(TOAST_DURATION));
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message).duration(Some(TOAST_DURATION));
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message).duration(Some(TOAST_DURATION));
    }

    /// Queue a notification produced by the application state
    pub fn push(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => self.success(notification.message),
            NotificationLevel::Error => self.error(notification.message),
            NotificationLevel::Warning => self.warning(notification.message),
            NotificationLevel::Info => self.info(notification.message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
