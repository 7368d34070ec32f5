//! # Expense List & Editor Screen
//!
//! Table of expenses within the selected day window, plus the create/edit
//! form in a modal window with per-field inline validation errors.

use egui;
use egui_extras::{Column, TableBuilder};

use crate::app::{App, AppState, ExpenseForm};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use shared::format_amount;

/// Render the expenses screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Expenses");
        ui.separator();
        if let Some(days) = forms::render_days_selector(ui, state.days_window) {
            app.handle_days_window_change(days);
        }
        if ui.button("New Expense").clicked() {
            app.handle_expense_editor_open(None);
        }
        if ui.button("Refresh").clicked() {
            app.refresh_current_screen();
        }
        if state.expenses.loading {
            ui.spinner();
        }
    });

    if let Some(error) = &state.expenses.error {
        forms::render_error(ui, error, &theme);
    }
    ui.add_space(8.0);

    if state.expenses.expenses.is_empty() && !state.expenses.loading {
        forms::render_hint(ui, "No expenses in this window yet.", &theme);
    } else {
        render_expense_table(ui, state, app, &theme);
    }

    if state.expenses.editor.is_some() {
        render_editor(ui.ctx(), state, app, &theme);
    }
}

fn render_expense_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(90.0)) // date
        .column(Column::auto().at_least(100.0)) // category
        .column(Column::remainder()) // merchant / note
        .column(Column::auto().at_least(90.0)) // amount
        .column(Column::auto().at_least(60.0)) // attachments
        .column(Column::auto().at_least(110.0)) // actions
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong("Merchant / Note");
            });
            header.col(|ui| {
                ui.strong("Amount");
            });
            header.col(|ui| {
                ui.strong("Files");
            });
            header.col(|ui| {
                ui.strong("");
            });
        })
        .body(|mut body| {
            for expense in &state.expenses.expenses {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(expense.expense_date.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(&expense.category);
                    });
                    row.col(|ui| {
                        let mut detail = expense.merchant.clone().unwrap_or_default();
                        if let Some(note) = &expense.note {
                            if !detail.is_empty() {
                                detail.push_str(" — ");
                            }
                            detail.push_str(note);
                        }
                        ui.label(egui::RichText::new(detail).color(theme.dim));
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format_amount(expense.amount)).strong(),
                        );
                    });
                    row.col(|ui| {
                        let count = expense.attachments.as_ref().map_or(0, Vec::len);
                        if count > 0 {
                            ui.label(format!("{count}"));
                        }
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            app.handle_expense_editor_open(Some(expense));
                        }
                        if ui.button("Delete").clicked() {
                            app.handle_expense_delete_click(expense.id.clone());
                        }
                    });
                });
            }
        });
}

/// Render the editor window over the list.
fn render_editor(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(form) = &state.expenses.editor else {
        return;
    };

    let title = if form.id.is_some() {
        "Edit Expense"
    } else {
        "New Expense"
    };
    let mut open = true;

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            render_editor_fields(ui, form, state, app, theme);
        });

    if !open {
        app.handle_expense_editor_close();
    }
}

fn render_editor_fields(
    ui: &mut egui::Ui,
    form: &ExpenseForm,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    let mut date_input = form.expense_date.clone();
    forms::render_text_input(ui, "Date:", &mut date_input, "YYYY-MM-DD", false, [280.0, 24.0]);
    if let Some(err) = &form.errors.expense_date {
        forms::render_field_error(ui, err, theme);
    }
    write_back(app, |editor| editor.expense_date = date_input.clone());
    ui.add_space(8.0);

    let mut amount_input = form.amount.clone();
    forms::render_text_input(ui, "Amount:", &mut amount_input, "0.00", false, [280.0, 24.0]);
    if let Some(err) = &form.errors.amount {
        forms::render_field_error(ui, err, theme);
    }
    write_back(app, |editor| editor.amount = amount_input.clone());
    ui.add_space(8.0);

    let mut category_input = form.category.clone();
    forms::render_text_input(
        ui,
        "Category:",
        &mut category_input,
        "groceries, rent, travel...",
        false,
        [280.0, 24.0],
    );
    if let Some(err) = &form.errors.category {
        forms::render_field_error(ui, err, theme);
    }
    write_back(app, |editor| editor.category = category_input.clone());
    ui.add_space(8.0);

    let mut merchant_input = form.merchant.clone();
    forms::render_text_input(
        ui,
        "Merchant (optional):",
        &mut merchant_input,
        "",
        false,
        [280.0, 24.0],
    );
    write_back(app, |editor| editor.merchant = merchant_input.clone());
    ui.add_space(8.0);

    let mut tags_input = form.tags.clone();
    forms::render_text_input(
        ui,
        "Tags (comma separated):",
        &mut tags_input,
        "food, weekly",
        false,
        [280.0, 24.0],
    );
    write_back(app, |editor| editor.tags = tags_input.clone());
    ui.add_space(8.0);

    let mut note_input = form.note.clone();
    forms::render_multiline_input(ui, "Note (optional):", &mut note_input, "", [280.0, 60.0]);
    write_back(app, |editor| editor.note = note_input.clone());
    ui.add_space(10.0);

    render_attachments(ui, form, state, app, theme);
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let save = ui.add_enabled(
            !state.expenses.saving,
            egui::Button::new("Save").fill(theme.selected),
        );
        if save.clicked() {
            app.handle_expense_save_click();
        }
        if state.expenses.saving {
            ui.spinner();
        }
        if ui.button("Cancel").clicked() {
            app.handle_expense_editor_close();
        }
    });
}

fn render_attachments(
    ui: &mut egui::Ui,
    form: &ExpenseForm,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
) {
    ui.label("Attachments:");
    for (index, attachment) in form.attachments.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&attachment.name).color(theme.dim));
            if ui.small_button("remove").clicked() {
                app.handle_remove_attachment(index);
            }
        });
    }

    if state.files.files.is_empty() {
        forms::render_hint(ui, "Upload files on the Files screen to attach them.", theme);
        return;
    }

    egui::ComboBox::from_id_salt("attach_stored_file")
        .selected_text("Attach a stored file...")
        .show_ui(ui, |ui| {
            for file in &state.files.files {
                if ui
                    .selectable_label(false, &file.original_filename)
                    .clicked()
                {
                    app.handle_attach_file(file);
                }
            }
        });
}

/// Apply one field mutation to the open editor behind the lock.
fn write_back(app: &mut App, mutate: impl FnOnce(&mut ExpenseForm)) {
    let mut state = app.state.write();
    if let Some(editor) = state.expenses.editor.as_mut() {
        mutate(editor);
    }
}
