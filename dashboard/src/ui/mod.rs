//! # Rendering
//!
//! - `root`: the eframe application shell
//! - `screens`: one renderer per screen
//! - `widgets`: shared form elements, header, toasts
//! - `theme`: color palette

pub mod root;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use root::DashboardApp;
