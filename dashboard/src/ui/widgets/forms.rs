//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui;

use crate::ui::theme::Theme;

/// Render a labeled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Render a labeled multi-line text input
pub fn render_multiline_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(
        size,
        egui::TextEdit::multiline(value).hint_text(hint).desired_rows(3),
    )
}

/// Render a styled button
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(egui::RichText::new(text).size(15.0));
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
            .size(22.0)
            .strong()
            .color(theme.selected),
    );
    ui.add_space(16.0);
}

/// Render a form-level error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(8.0);
}

/// Render a per-field inline error, directly under the offending input
pub fn render_field_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(12.0).color(theme.error));
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(12.0).color(theme.dim));
}

/// Render the shared day-window selector; returns the new window when the
/// user picks a different one.
pub fn render_days_selector(ui: &mut egui::Ui, current: u32) -> Option<u32> {
    let mut selected = current;
    egui::ComboBox::from_id_salt("days_window")
        .selected_text(format!("Last {current} days"))
        .show_ui(ui, |ui| {
            for days in [7u32, 30, 90, 365] {
                ui.selectable_value(&mut selected, days, format!("Last {days} days"));
            }
        });
    (selected != current).then_some(selected)
}
