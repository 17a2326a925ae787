//! # Students Screen
//!
//! Searchable student table with per-row Edit/Delete and a delete
//! confirmation dialog.

use egui;
use shared::truncate_text;

use crate::app::{AppLike, Page};
use crate::ui::theme::Theme;
use crate::ui::view::{DeleteConfirm, StudentsView};
use crate::ui::widgets::forms;
use crate::ui::widgets::tables;

/// Longest cell text before it is ellipsized
const MAX_CELL_CHARS: usize = 32;

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Course", "Semester", "Actions"];

enum RowAction {
    Edit(i64),
    Delete(i64),
}

pub fn render(ui: &mut egui::Ui, view: &StudentsView, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.heading("Students");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if forms::render_button(ui, "Add Student", Some("+"), Some(theme.selected), None).clicked() {
                app.navigate_to(Page::AddStudent);
            }
        });
    });
    ui.add_space(12.0);

    let mut search = view.search.clone();
    ui.horizontal(|ui| {
        ui.label("Search:");
        let response = ui.add_sized(
            [320.0, 28.0],
            egui::TextEdit::singleline(&mut search).hint_text("Name or course"),
        );
        if response.changed() {
            app.handle_search_change(search.clone());
        }
        if view.loading {
            ui.spinner();
        }
    });
    ui.add_space(12.0);

    if let Some((title, hint)) = view.empty {
        tables::render_empty_state(ui, title, Some(hint), theme);
    } else if let Some(action) = render_student_table(ui, view, theme) {
        match action {
            RowAction::Edit(id) => app.handle_edit_click(id),
            RowAction::Delete(id) => app.handle_delete_click(id),
        }
    }

    if let Some(confirm) = &view.confirm_delete {
        render_confirm_delete(ui.ctx(), confirm, app, theme);
    }
}

/// Student table; returns the row action clicked this frame
fn render_student_table(ui: &mut egui::Ui, view: &StudentsView, theme: &Theme) -> Option<RowAction> {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size;
    let mut action = None;

    egui_extras::TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(egui_extras::Column::exact(50.0)) // ID
        .column(egui_extras::Column::initial(180.0).at_least(100.0)) // Name
        .column(egui_extras::Column::initial(220.0).at_least(100.0)) // Email
        .column(egui_extras::Column::initial(180.0).at_least(100.0)) // Course
        .column(egui_extras::Column::exact(80.0)) // Semester
        .column(egui_extras::Column::remainder().at_least(120.0)) // Actions
        .header(text_height + 8.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong().color(theme.selected));
                });
            }
        })
        .body(|body| {
            body.rows(text_height + 12.0, view.rows.len(), |mut row| {
                let student = &view.rows[row.index()];
                row.col(|ui| {
                    ui.label(student.id.to_string());
                });
                row.col(|ui| {
                    ui.label(truncate_text(&student.name, MAX_CELL_CHARS));
                });
                row.col(|ui| {
                    ui.label(truncate_text(&student.email, MAX_CELL_CHARS));
                });
                row.col(|ui| {
                    ui.label(truncate_text(&student.course, MAX_CELL_CHARS));
                });
                row.col(|ui| {
                    ui.label(student.semester.to_string());
                });
                row.col(|ui| {
                    if ui.small_button("Edit").clicked() {
                        action = Some(RowAction::Edit(student.id));
                    }
                    if ui
                        .small_button(egui::RichText::new("Delete").color(theme.error))
                        .clicked()
                    {
                        action = Some(RowAction::Delete(student.id));
                    }
                });
            });
        });

    action
}

fn render_confirm_delete(ctx: &egui::Context, confirm: &DeleteConfirm, app: &mut impl AppLike, theme: &Theme) {
    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(confirm.prompt);
            ui.colored_label(theme.dim, format!("Student #{}", confirm.id));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if forms::render_button(ui, "Delete", None, Some(theme.error), None).clicked() {
                    app.handle_delete_confirm();
                }
                if forms::render_button(ui, "Cancel", None, None, None).clicked() {
                    app.handle_delete_cancel();
                }
            });
        });
}
