//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui;

use crate::ui::theme::Theme;

pub const FIELD_SIZE: [f32; 2] = [280.0, 30.0];

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{} {}", icon, text),
        None => text.to_string(),
    };

    let mut button = egui::Button::new(egui::RichText::new(button_text).size(15.0));
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .size(24.0)
            .strong()
            .color(theme.selected),
    );
    ui.add_space(16.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// True when Enter was pressed while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
