//! # Header Bar
//!
//! Tab strip across the authenticated screens, with the signed-in identity
//! and sign-out on the right. Hidden on the sign-in screen.

use egui::{Align, Layout, RichText};

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the header tab strip. Only visible when authenticated.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    if !state.is_authenticated() {
        return;
    }

    let theme = Theme::default();
    ui.horizontal(|ui| {
        ui.set_height(32.0);
        ui.label(
            RichText::new("SPENDDECK")
                .strong()
                .size(16.0)
                .color(theme.selected),
        );
        ui.separator();

        for screen in Screen::all() {
            if *screen == Screen::Auth {
                continue;
            }
            let active = state.current_screen == *screen;
            if ui.selectable_label(active, screen.title()).clicked() && !active {
                app.handle_screen_change(*screen);
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Sign Out").clicked() {
                app.handle_logout_click();
            }
            if let Some(user) = state.session.user() {
                ui.label(RichText::new(&user.email).color(theme.dim));
            }
        });
    });
}
