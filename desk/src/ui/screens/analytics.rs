//! # Analytics Screen
//!
//! Summary cards plus students-per-course and students-per-semester tables.

use egui;

use crate::ui::theme::Theme;
use crate::ui::view::AnalyticsView;
use crate::ui::widgets::tables;

pub fn render(ui: &mut egui::Ui, view: &AnalyticsView, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Analytics");
        if view.loading {
            ui.spinner();
        }
    });
    ui.add_space(16.0);

    tables::render_stat_cards(ui, &view.cards, theme);
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Students by Course").size(16.0).strong());
        columns[0].add_space(8.0);
        tables::render_count_table(&mut columns[0], "by_course", ["Course", "Students"], &view.by_course, theme);

        columns[1].label(egui::RichText::new("Students by Semester").size(16.0).strong());
        columns[1].add_space(8.0);
        tables::render_count_table(
            &mut columns[1],
            "by_semester",
            ["Semester", "Students"],
            &view.by_semester,
            theme,
        );
    });
}
