//! # Navigation Bar
//!
//! Top bar of the authenticated frame: app title, page links, the logged-in
//! user and the logout button.

use egui;

use crate::app::AppLike;
use crate::ui::theme::Theme;
use crate::ui::view::NavEntry;

pub const APP_TITLE: &str = "Student Management System";

/// Render the navigation bar
pub fn render_nav_bar(
    ui: &mut egui::Ui,
    user_label: &str,
    nav: &[NavEntry],
    app: &mut impl AppLike,
    theme: &Theme,
) {
    ui.horizontal(|ui| {
        ui.set_height(36.0);
        ui.label(egui::RichText::new(APP_TITLE).size(18.0).strong().color(theme.selected));
        ui.add_space(24.0);

        for entry in nav {
            let text = if entry.active {
                egui::RichText::new(entry.label).strong().color(theme.selected)
            } else {
                egui::RichText::new(entry.label)
            };
            if ui.selectable_label(entry.active, text).clicked() && !entry.active {
                app.navigate_to(entry.page);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                app.handle_logout();
            }
            ui.colored_label(theme.dim, user_label);
        });
    });
}
