//! Screen-specific rendering.
//!
//! Each screen renders from a per-frame snapshot of [`crate::app::AppState`]
//! and forwards user actions to the [`crate::app::App`] handlers.

pub mod auth;
pub mod expenses;
pub mod files;
pub mod overview;
pub mod profile;
