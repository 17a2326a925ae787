//! # Authentication Screen
//!
//! Login and signup forms using egui widgets.

use egui;

use crate::app::{AppLike, AuthState};
use crate::ui::theme::Theme;
use crate::ui::view::LoginView;
use crate::ui::widgets::forms::{self, FIELD_SIZE};
use crate::ui::widgets::nav_bar::APP_TITLE;

/// Render authentication screen (login/signup)
pub fn render(ui: &mut egui::Ui, view: &LoginView, app: &mut impl AppLike, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(egui::RichText::new(APP_TITLE).size(28.0).strong());
        ui.add_space(30.0);

        egui::Frame::group(ui.style())
            .fill(theme.surface)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(FIELD_SIZE[0] + 20.0);
                match &view.form {
                    AuthState::Login { username, password } => {
                        render_login_form(ui, username, password, view.pending, app, theme)
                    }
                    AuthState::Signup {
                        username,
                        email,
                        password,
                    } => render_signup_form(ui, username, email, password, view.pending, app, theme),
                }

                if let Some(hint) = view.demo_hint {
                    ui.add_space(12.0);
                    forms::render_hint(ui, hint, theme);
                }
            });
    });
}

/// Render login form
fn render_login_form(
    ui: &mut egui::Ui,
    username: &str,
    password: &str,
    pending: bool,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Login", theme);

    // Local copies; written back to state every frame
    let mut username_input = username.to_string();
    let mut password_input = password.to_string();

    forms::render_text_input(ui, "Username", &mut username_input, "Enter username", false, FIELD_SIZE);
    ui.add_space(8.0);
    let password_response =
        forms::render_text_input(ui, "Password", &mut password_input, "Enter password", true, FIELD_SIZE);
    let submit = forms::submitted(ui, &password_response);

    if username_input != username || password_input != password {
        let mut state = app.state().write();
        if let AuthState::Login { username, password } = &mut state.auth {
            *username = username_input.clone();
            *password = password_input.clone();
        }
    }

    ui.add_space(16.0);
    let label = if pending { "Logging in..." } else { "Login" };
    let clicked = ui
        .add_enabled_ui(!pending, |ui| {
            forms::render_button(ui, label, None, Some(theme.selected), Some(egui::vec2(FIELD_SIZE[0], 34.0)))
        })
        .inner
        .clicked();
    if (clicked || submit) && !pending {
        app.handle_login_click(username_input, password_input);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Don't have an account?");
        if ui.link("Sign up").clicked() {
            app.handle_switch_to_signup();
        }
    });
}

/// Render signup form
fn render_signup_form(
    ui: &mut egui::Ui,
    username: &str,
    email: &str,
    password: &str,
    pending: bool,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Create Account", theme);

    let mut username_input = username.to_string();
    let mut email_input = email.to_string();
    let mut password_input = password.to_string();

    forms::render_text_input(ui, "Username", &mut username_input, "Choose username", false, FIELD_SIZE);
    ui.add_space(8.0);
    forms::render_text_input(ui, "Email", &mut email_input, "your@email.com", false, FIELD_SIZE);
    ui.add_space(8.0);
    let password_response =
        forms::render_text_input(ui, "Password", &mut password_input, "Choose password", true, FIELD_SIZE);
    let submit = forms::submitted(ui, &password_response);

    if username_input != username || email_input != email || password_input != password {
        let mut state = app.state().write();
        if let AuthState::Signup {
            username,
            email,
            password,
        } = &mut state.auth
        {
            *username = username_input.clone();
            *email = email_input.clone();
            *password = password_input.clone();
        }
    }

    ui.add_space(16.0);
    let label = if pending { "Creating account..." } else { "Sign Up" };
    let clicked = ui
        .add_enabled_ui(!pending, |ui| {
            forms::render_button(ui, label, None, Some(theme.selected), Some(egui::vec2(FIELD_SIZE[0], 34.0)))
        })
        .inner
        .clicked();
    if (clicked || submit) && !pending {
        app.handle_signup_click(username_input, email_input, password_input);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Already have an account?");
        if ui.link("Login").clicked() {
            app.handle_switch_to_login();
        }
    });
}
