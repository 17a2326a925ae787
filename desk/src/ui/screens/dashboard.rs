//! # Dashboard Screen

use egui;

use crate::app::{AppLike, Page};
use crate::ui::theme::Theme;
use crate::ui::view::DashboardView;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut egui::Ui, view: &DashboardView, app: &mut impl AppLike, theme: &Theme) {
    ui.heading("Dashboard");
    forms::render_hint(
        ui,
        "Welcome to the Student Management System. Use the navigation bar to manage student records.",
        theme,
    );
    ui.add_space(16.0);

    if view.loading {
        ui.spinner();
    }
    tables::render_stat_cards(ui, &view.cards, theme);

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        if forms::render_button(ui, "Add Student", Some("+"), Some(theme.selected), None).clicked() {
            app.navigate_to(Page::AddStudent);
        }
        if forms::render_button(ui, "View Students", None, None, None).clicked() {
            app.navigate_to(Page::Students);
        }
    });
}
