//! # GUI Theme
//!
//! Dark slate theme with a teal accent. High contrast, sharp edges, no
//! decoration that competes with the numbers.

use egui::{Color32, Context, Visuals};

/// Color palette used by the screens.
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    /// Primary accent (buttons, headings, active tab)
    pub selected: Color32,
    pub error: Color32,
    pub success: Color32,
    pub warning: Color32,
    /// Secondary text
    pub dim: Color32,
    pub chart_bar: Color32,
    pub chart_line: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(16, 18, 22),
            panel: Color32::from_rgb(24, 27, 33),
            text: Color32::from_rgb(230, 233, 238),
            selected: Color32::from_rgb(38, 166, 154),
            error: Color32::from_rgb(239, 83, 80),
            success: Color32::from_rgb(102, 187, 106),
            warning: Color32::from_rgb(255, 183, 77),
            dim: Color32::from_rgb(140, 148, 160),
            chart_bar: Color32::from_rgb(38, 166, 154),
            chart_line: Color32::from_rgb(100, 181, 246),
        }
    }
}

impl Theme {
    /// Install the palette into the egui context. Called once at startup.
    pub fn apply(ctx: &Context) {
        let theme = Theme::default();
        let mut visuals = Visuals::dark();
        visuals.panel_fill = theme.panel;
        visuals.window_fill = theme.panel;
        visuals.extreme_bg_color = theme.background;
        visuals.selection.bg_fill = theme.selected.linear_multiply(0.6);
        visuals.hyperlink_color = theme.selected;
        ctx.set_visuals(visuals);
    }
}
