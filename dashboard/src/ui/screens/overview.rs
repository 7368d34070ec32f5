//! # Spending Overview Screen
//!
//! Derived aggregates for the selected day window: summary tiles, a
//! per-category bar chart, and a per-day spending line. All numbers come
//! from [`crate::utils::aggregate::summarize`] over the list the expenses
//! screen last fetched.

use egui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::utils::aggregate::{self, SpendingSummary};
use shared::format_amount;

/// Render the overview screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Spending Overview");
        ui.separator();
        if let Some(days) = forms::render_days_selector(ui, state.days_window) {
            app.handle_days_window_change(days);
        }
        if ui.button("Refresh").clicked() {
            app.refresh_current_screen();
        }
        if state.expenses.loading {
            ui.spinner();
        }
    });
    ui.add_space(10.0);

    let summary = aggregate::summarize(&state.expenses.expenses);
    render_tiles(ui, &summary, &theme);
    ui.add_space(14.0);

    if summary.count == 0 {
        forms::render_hint(ui, "No expenses in this window yet.", &theme);
        return;
    }

    ui.columns(2, |columns| {
        render_category_chart(&mut columns[0], &summary, &theme);
        render_daily_chart(&mut columns[1], &summary, &theme);
    });
}

fn render_tiles(ui: &mut egui::Ui, summary: &SpendingSummary, theme: &Theme) {
    ui.horizontal(|ui| {
        tile(ui, "Total", &format_amount(summary.total), theme);
        tile(ui, "Expenses", &summary.count.to_string(), theme);
        tile(ui, "Average", &format_amount(summary.average), theme);
        let top = summary
            .by_category
            .first()
            .map(|c| c.category.clone())
            .unwrap_or_else(|| "—".to_string());
        tile(ui, "Top Category", &top, theme);
    });
}

fn tile(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).size(12.0).color(theme.dim));
                ui.label(egui::RichText::new(value).size(20.0).strong());
            });
        });
}

fn render_category_chart(ui: &mut egui::Ui, summary: &SpendingSummary, theme: &Theme) {
    ui.label(egui::RichText::new("By category").strong());
    ui.add_space(4.0);

    let bars: Vec<Bar> = summary
        .by_category
        .iter()
        .enumerate()
        .map(|(index, category)| {
            Bar::new(index as f64, category.total)
                .width(0.6)
                .name(&category.category)
        })
        .collect();

    Plot::new("spend_by_category")
        .view_aspect(1.6)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("By category", bars).color(theme.chart_bar));
        });

    ui.add_space(6.0);
    for category in &summary.by_category {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&category.category).color(theme.dim));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format_amount(category.total));
            });
        });
    }
}

fn render_daily_chart(ui: &mut egui::Ui, summary: &SpendingSummary, theme: &Theme) {
    ui.label(egui::RichText::new("By day").strong());
    ui.add_space(4.0);

    let points: Vec<[f64; 2]> = summary
        .daily
        .iter()
        .enumerate()
        .map(|(index, day)| [index as f64, day.total])
        .collect();

    Plot::new("spend_by_day")
        .view_aspect(1.6)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Daily spend", PlotPoints::from(points))
                    .color(theme.chart_line)
                    .width(2.0),
            );
        });

    ui.add_space(6.0);
    if let (Some(first), Some(last)) = (summary.daily.first(), summary.daily.last()) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(first.date.format("%Y-%m-%d").to_string()).color(theme.dim),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(last.date.format("%Y-%m-%d").to_string())
                        .color(theme.dim),
                );
            });
        });
    }
}
