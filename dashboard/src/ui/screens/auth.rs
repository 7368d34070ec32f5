//! # Authentication Screen
//!
//! Login and signup forms using egui widgets.

use egui;

use crate::app::{App, AppState, AuthState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Signup form input values
struct SignupFormInputs<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
}

/// Render authentication screen (login/signup)
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    if state.restoring_session {
        ui.vertical_centered(|ui| {
            ui.add_space(220.0);
            ui.spinner();
            ui.add_space(8.0);
            forms::render_hint(ui, "Restoring session...", &theme);
        });
        return;
    }

    // Split screen: branding left, form right
    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui| {
            ui.add_space(140.0);
            ui.label(
                egui::RichText::new("SPENDDECK")
                    .size(40.0)
                    .strong()
                    .color(theme.selected),
            );
            ui.add_space(10.0);
            forms::render_hint(
                ui,
                "Track spending, attach receipts, see the whole picture.",
                &theme,
            );
        });

        columns[1].vertical_centered(|ui| {
            ui.add_space(100.0);
            match &state.auth {
                AuthState::Login {
                    email,
                    password,
                    error,
                } => render_login_form(ui, email, password, error.as_deref(), app, &theme),
                AuthState::Signup {
                    name,
                    email,
                    password,
                    confirm_password,
                    error,
                } => render_signup_form(
                    ui,
                    &SignupFormInputs {
                        name,
                        email,
                        password,
                        confirm_password,
                    },
                    error.as_deref(),
                    app,
                    &theme,
                ),
            }
        });
    });
}

/// Render login form
fn render_login_form(
    ui: &mut egui::Ui,
    email: &str,
    password: &str,
    error: Option<&str>,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "SIGN IN", theme);

    let mut email_input = email.to_string();
    let mut password_input = password.to_string();
    let mut submit = false;

    forms::render_text_input(
        ui,
        "Email:",
        &mut email_input,
        "you@example.com",
        false,
        [250.0, 28.0],
    );
    {
        let mut state = app.state.write();
        if let AuthState::Login { email, .. } = &mut state.auth {
            *email = email_input.clone();
        }
    }
    ui.add_space(10.0);

    let password_response = forms::render_text_input(
        ui,
        "Password:",
        &mut password_input,
        "Enter password",
        true,
        [250.0, 28.0],
    );
    if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }
    {
        let mut state = app.state.write();
        if let AuthState::Login { password, .. } = &mut state.auth {
            *password = password_input.clone();
        }
    }
    ui.add_space(14.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    ui.with_layout(egui::Layout::left_to_right(egui::Align::LEFT), |ui| {
        ui.set_width(250.0);
        let clicked = forms::render_button(
            ui,
            "Sign In",
            Some(theme.selected),
            Some(egui::vec2(100.0, 32.0)),
        )
        .clicked();
        if clicked || submit {
            app.handle_login_click(email_input.clone(), password_input.clone());
        }

        ui.add_space(10.0);
        if ui.button("Create an account").clicked() {
            app.handle_switch_to_signup();
        }
    });

    ui.add_space(10.0);
    forms::render_hint(ui, "Press <Enter> to sign in", theme);
}

/// Render signup form
fn render_signup_form(
    ui: &mut egui::Ui,
    inputs: &SignupFormInputs,
    error: Option<&str>,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "CREATE ACCOUNT", theme);

    let mut name_input = inputs.name.to_string();
    let mut email_input = inputs.email.to_string();
    let mut password_input = inputs.password.to_string();
    let mut confirm_input = inputs.confirm_password.to_string();
    let mut submit = false;

    forms::render_text_input(ui, "Name:", &mut name_input, "Your name", false, [250.0, 28.0]);
    {
        let mut state = app.state.write();
        if let AuthState::Signup { name, .. } = &mut state.auth {
            *name = name_input.clone();
        }
    }
    ui.add_space(10.0);

    forms::render_text_input(
        ui,
        "Email:",
        &mut email_input,
        "you@example.com",
        false,
        [250.0, 28.0],
    );
    {
        let mut state = app.state.write();
        if let AuthState::Signup { email, .. } = &mut state.auth {
            *email = email_input.clone();
        }
    }
    ui.add_space(10.0);

    forms::render_text_input(
        ui,
        "Password:",
        &mut password_input,
        "Min 8 chars, mixed case + digit",
        true,
        [250.0, 28.0],
    );
    {
        let mut state = app.state.write();
        if let AuthState::Signup { password, .. } = &mut state.auth {
            *password = password_input.clone();
        }
    }
    ui.add_space(10.0);

    let confirm_response = forms::render_text_input(
        ui,
        "Confirm Password:",
        &mut confirm_input,
        "Repeat password",
        true,
        [250.0, 28.0],
    );
    if confirm_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }
    {
        let mut state = app.state.write();
        if let AuthState::Signup {
            confirm_password, ..
        } = &mut state.auth
        {
            *confirm_password = confirm_input.clone();
        }
    }
    ui.add_space(14.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    ui.with_layout(egui::Layout::left_to_right(egui::Align::LEFT), |ui| {
        ui.set_width(250.0);
        let clicked = forms::render_button(
            ui,
            "Sign Up",
            Some(theme.selected),
            Some(egui::vec2(100.0, 32.0)),
        )
        .clicked();
        if clicked || submit {
            app.handle_signup_click(
                name_input.clone(),
                email_input.clone(),
                password_input.clone(),
                confirm_input.clone(),
            );
        }

        ui.add_space(10.0);
        if ui.button("Back to sign in").clicked() {
            app.handle_switch_to_login();
        }
    });
}
