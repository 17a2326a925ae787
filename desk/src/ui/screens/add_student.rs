//! # Add Student Screen

use egui;

use crate::app::{AppLike, Page};
use crate::ui::theme::Theme;
use crate::ui::view::AddStudentView;
use crate::ui::widgets::forms::{self, FIELD_SIZE};

const WIDE_FIELD: [f32; 2] = [420.0, 30.0];

pub fn render(ui: &mut egui::Ui, view: &AddStudentView, app: &mut impl AppLike, theme: &Theme) {
    forms::render_form_heading(ui, "Add New Student", theme);

    let mut form = view.form.clone();
    let (min, max) = view.semester_range;

    egui::Grid::new("add_student_form")
        .num_columns(2)
        .spacing([24.0, 12.0])
        .show(ui, |ui| {
            ui.vertical(|ui| {
                forms::render_text_input(ui, "Name *", &mut form.name, "Full name", false, FIELD_SIZE);
            });
            ui.vertical(|ui| {
                forms::render_text_input(ui, "Email", &mut form.email, "student@example.com", false, FIELD_SIZE);
            });
            ui.end_row();

            ui.vertical(|ui| {
                forms::render_text_input(ui, "Course *", &mut form.course, "e.g. Computer Science", false, FIELD_SIZE);
            });
            ui.vertical(|ui| {
                let hint = format!("{}-{}", min, max);
                forms::render_text_input(ui, "Semester *", &mut form.semester, &hint, false, FIELD_SIZE);
            });
            ui.end_row();

            ui.vertical(|ui| {
                forms::render_text_input(ui, "Phone", &mut form.phone, "Phone number", false, FIELD_SIZE);
            });
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.label("Address");
    ui.add_sized(
        [WIDE_FIELD[0], 60.0],
        egui::TextEdit::multiline(&mut form.address).hint_text("Street, city"),
    );

    if form != view.form {
        app.state().write().student_form = form;
    }

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        let label = if view.pending { "Saving..." } else { "Save Student" };
        let saved = ui
            .add_enabled_ui(!view.pending, |ui| {
                forms::render_button(ui, label, None, Some(theme.selected), None)
            })
            .inner
            .clicked();
        if saved {
            app.handle_add_student_submit();
        }
        if forms::render_button(ui, "Cancel", None, None, None).clicked() {
            app.navigate_to(Page::Students);
        }
    });

    ui.add_space(8.0);
    forms::render_hint(ui, "Fields marked * are required.", theme);
}
