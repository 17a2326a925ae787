//! # GUI Rendering Framework
//!
//! This module orchestrates the UI rendering pipeline using **egui widgets**.
//! Each frame builds a [`view::View`] from a state snapshot, then paints it:
//! the navigation bar for authenticated pages and the active screen in the
//! central panel.

pub mod screens;
pub mod theme;
pub mod view;
pub mod widgets;
pub mod window;

use egui;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::view::{PageView, ShellView};
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager, theme: &Theme) {
    for notification in app.drain_notifications() {
        notifications.push(notification);
    }

    // Lock released before painting
    let view = app.view();

    if let ShellView::Authenticated { user_label, nav } = &view.shell {
        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                widgets::nav_bar::render_nav_bar(ui, user_label, nav, app, theme);
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match &view.page {
                PageView::Login(login) => screens::auth::render(ui, login, app, theme),
                PageView::Dashboard(dashboard) => screens::dashboard::render(ui, dashboard, app, theme),
                PageView::Students(students) => screens::students::render(ui, students, app, theme),
                PageView::AddStudent(form) => screens::add_student::render(ui, form, app, theme),
                PageView::Analytics(analytics) => screens::analytics::render(ui, analytics, theme),
            });
    });
}
