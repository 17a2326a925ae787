//! # Table Components
//!
//! Grid tables, empty states and stat cards.

use egui;

use crate::ui::theme::Theme;
use crate::ui::view::{CountRow, StatCard};

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 2,
            spacing: [24.0, 8.0],
            striped: true,
            scrollable: false,
        }
    }
}

/// Render a data table with headers and rows
pub fn render_table<F>(
    ui: &mut egui::Ui,
    id: &str,
    config: TableConfig,
    headers: &[&str],
    theme: &Theme,
    render_rows: F,
) where
    F: FnOnce(&mut egui::Ui),
{
    let table_render = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, |ui| {
                for header in headers {
                    ui.colored_label(theme.selected, *header);
                }
                ui.end_row();

                render_rows(ui);
            });
    };

    if config.scrollable {
        egui::ScrollArea::vertical().show(ui, table_render);
    } else {
        table_render(ui);
    }
}

/// Two-column label/count table
pub fn render_count_table(ui: &mut egui::Ui, id: &str, headers: [&str; 2], rows: &[CountRow], theme: &Theme) {
    if rows.is_empty() {
        render_empty_state(ui, "No data yet", None, theme);
        return;
    }

    render_table(ui, id, TableConfig::default(), &headers, theme, |ui| {
        for row in rows {
            ui.label(&row.label);
            ui.label(row.count.to_string());
            ui.end_row();
        }
    });
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(egui::RichText::new(primary_text).size(18.0).color(theme.dim));
        if let Some(secondary) = secondary_text {
            ui.add_space(8.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Row of stat cards
pub fn render_stat_cards(ui: &mut egui::Ui, cards: &[StatCard], theme: &Theme) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            egui::Frame::group(ui.style())
                .fill(theme.surface)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_min_width(180.0);
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&card.value).size(28.0).strong());
                        ui.colored_label(theme.dim, card.label);
                    });
                });
        }
    });
}
