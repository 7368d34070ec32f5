//! # Notifications Widget
//!
//! Toast notification system using egui-notify. Handlers and the event
//! handler queue `(level, message)` pairs in state; the shell drains the
//! queue into toasts each frame.

use egui_notify::Toasts;

use crate::app::NotifyLevel;

/// Notification manager for the application
pub struct NotificationManager {
    toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one toast.
    pub fn push(&mut self, level: NotifyLevel, message: String) {
        match level {
            NotifyLevel::Success => {
                self.toasts.success(message);
            }
            NotifyLevel::Error => {
                self.toasts.error(message);
            }
            NotifyLevel::Info => {
                self.toasts.info(message);
            }
        }
    }

    /// Render pending toasts.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
