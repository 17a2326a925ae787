//! # Native Window
//!
//! [`DeskWindow`] adapts [`App`] to `eframe::App`: it drains async results,
//! paints the current view and keeps repainting while requests are in flight.

use std::time::Duration;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Frame interval while idle, so results from background tasks show up
/// without user input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct DeskWindow {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl DeskWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }
}

impl eframe::App for DeskWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        super::render(ctx, &mut self.app, &mut self.notifications, &self.theme);
        self.notifications.show(ctx);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
