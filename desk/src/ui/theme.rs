//! # Theme
//!
//! Dark palette with rounded controls, applied once at startup.

use egui::{Color32, Context, CornerRadius, Stroke, Theme as EguiTheme, Visuals};

/// Application colors
#[derive(Clone, Debug)]
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Accent for headings, the active nav entry and primary buttons
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Window background
    pub background: Color32,
    /// Card and panel fill
    pub surface: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(226, 232, 240),     // #E2E8F0
            selected: Color32::from_rgb(99, 102, 241),    // #6366F1 indigo
            border: Color32::from_rgb(51, 65, 85),        // #334155
            dim: Color32::from_rgb(100, 116, 139),        // #64748B
            success: Color32::from_rgb(34, 197, 94),      // #22C55E
            error: Color32::from_rgb(239, 68, 68),        // #EF4444
            warning: Color32::from_rgb(245, 158, 11),     // #F59E0B
            info: Color32::from_rgb(59, 130, 246),        // #3B82F6
            background: Color32::from_rgb(15, 23, 42),    // #0F172A
            surface: Color32::from_rgb(30, 41, 59),       // #1E293B
        }
    }
}

impl Theme {
    /// Build egui visuals from the palette
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        let rounded = CornerRadius::same(10);

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_corner_radius = CornerRadius::same(14);
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.corner_radius = rounded;

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.weak_bg_fill = self.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.corner_radius = rounded;

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.selected);
        visuals.widgets.hovered.corner_radius = rounded;
        visuals.widgets.active.bg_fill = self.selected;
        visuals.widgets.active.corner_radius = rounded;

        visuals.selection.bg_fill = self.selected.gamma_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.5, self.selected);
        visuals.hyperlink_color = self.info;

        visuals
    }

    /// Apply the theme to both egui theme slots.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        for slot in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(slot, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::vec2(8.0, 6.0);
                style.spacing.button_padding = egui::vec2(12.0, 6.0);
                style.spacing.interact_size = egui::vec2(40.0, 28.0);
            });
        }
        ctx.set_theme(EguiTheme::Dark);

        tracing::debug!("Applied theme visuals");
    }
}
