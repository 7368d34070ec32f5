//! # Profile Editor Screen
//!
//! Name/email editor bound to `/profiles/me`.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the profile screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Profile");
        if state.profile.loading {
            ui.spinner();
        }
    });

    if let Some(user) = state.session.user() {
        forms::render_hint(ui, &format!("{} · {}", user.role, user.id), &theme);
    }
    ui.add_space(12.0);

    let mut name_input = state.profile.name.clone();
    forms::render_text_input(ui, "Name:", &mut name_input, "Your name", false, [280.0, 26.0]);
    if name_input != state.profile.name {
        app.state.write().profile.name = name_input;
    }
    ui.add_space(8.0);

    let mut email_input = state.profile.email.clone();
    forms::render_text_input(
        ui,
        "Email:",
        &mut email_input,
        "you@example.com",
        false,
        [280.0, 26.0],
    );
    if email_input != state.profile.email {
        app.state.write().profile.email = email_input;
    }
    ui.add_space(12.0);

    if let Some(error) = &state.profile.error {
        forms::render_error(ui, error, &theme);
    }

    ui.horizontal(|ui| {
        let save = ui.add_enabled(
            !state.profile.saving,
            egui::Button::new("Save Changes").fill(theme.selected),
        );
        if save.clicked() {
            app.handle_profile_save_click();
        }
        if state.profile.saving {
            ui.spinner();
        }
    });
}
