//! # File Manager Screen
//!
//! Uploaded-file table with upload (disabled while one is in flight) and
//! browser-handled downloads.

use egui;
use egui_extras::{Column, TableBuilder};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use shared::format_size;

/// Render the files screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Files");
        ui.separator();
        let upload = ui.add_enabled(
            !state.files.uploading,
            egui::Button::new("Upload File").fill(theme.selected),
        );
        if upload.clicked() {
            app.handle_upload_click();
        }
        if state.files.uploading {
            ui.spinner();
            forms::render_hint(ui, "Uploading...", &theme);
        }
        if ui.button("Refresh").clicked() {
            app.refresh_current_screen();
        }
        if state.files.loading {
            ui.spinner();
        }
    });

    if let Some(error) = &state.files.error {
        forms::render_error(ui, error, &theme);
    }

    forms::render_hint(
        ui,
        &format!("{} files stored", state.files.total_count),
        &theme,
    );
    ui.add_space(8.0);

    if state.files.files.is_empty() && !state.files.loading {
        forms::render_hint(ui, "Nothing uploaded yet.", &theme);
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder()) // filename
        .column(Column::auto().at_least(80.0)) // size
        .column(Column::auto().at_least(130.0)) // last modified
        .column(Column::auto().at_least(80.0)) // actions
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Size");
            });
            header.col(|ui| {
                ui.strong("Last Modified");
            });
            header.col(|ui| {
                ui.strong("");
            });
        })
        .body(|mut body| {
            for file in &state.files.files {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&file.original_filename);
                    });
                    row.col(|ui| {
                        ui.label(format_size(file.size));
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(
                                file.last_modified.format("%Y-%m-%d %H:%M").to_string(),
                            )
                            .color(theme.dim),
                        );
                    });
                    row.col(|ui| {
                        if ui.button("Download").clicked() {
                            app.handle_download_click(&file.key);
                        }
                    });
                });
            }
        });
}
