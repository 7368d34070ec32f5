//! # Application Shell
//!
//! The eframe entry point: drains task results, gates protected screens,
//! routes to the active screen renderer, and shows toasts.

use std::time::Duration;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;
use crate::ui::{screens, widgets};

pub struct DashboardApp {
    app: App,
    notifications: NotificationManager,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        // Queued notifications become toasts.
        let pending = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (level, message) in pending {
            self.notifications.push(level, message);
        }

        // Auth gate: protected screens redirect to sign-in once the startup
        // restore has settled.
        {
            let mut state = self.app.state.write();
            if AppState::requires_auth(state.current_screen)
                && !state.is_authenticated()
                && !state.restoring_session
            {
                state.current_screen = Screen::Auth;
            }
        }

        // Ctrl+Tab / Ctrl+Shift+Tab cycle through the screens.
        let (cycle, back) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::Tab),
                i.modifiers.shift,
            )
        });
        if cycle {
            if back {
                self.app.previous_screen();
            } else {
                self.app.next_screen();
            }
        }

        // Per-frame snapshot; handlers take their own write locks.
        let state = self.app.state.read().clone();

        if state.current_screen != Screen::Auth {
            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                widgets::header::render(ui, &state, &mut self.app);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
            Screen::Auth => screens::auth::render(ui, &state, &mut self.app),
            Screen::Expenses => screens::expenses::render(ui, &state, &mut self.app),
            Screen::Overview => screens::overview::render(ui, &state, &mut self.app),
            Screen::Files => screens::files::render(ui, &state, &mut self.app),
            Screen::Profile => screens::profile::render(ui, &state, &mut self.app),
        });

        self.notifications.show(ctx);

        // Task results arrive off-frame; poll for them at a steady cadence.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
