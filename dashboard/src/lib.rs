//! # Expense Dashboard - Library Root
//!
//! A native desktop dashboard for an expense-tracking backend. All business
//! logic (persistence, authentication, file storage) lives in the remote API;
//! this crate is presentation and form-handling glue around it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui/eframe   - Immediate-mode GUI                    │
//! │  egui_plot     - Spending charts                       │
//! │  Tokio         - Async runtime for network tasks       │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (bearer token, JSON envelopes)
//!          ▼
//! ┌─────────────────┐
//! │  Expense API    │
//! │  (remote)       │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: application state, events, handlers, and async tasks
//! - **core**: error types and the `ApiService` trait used for dependency
//!   injection
//! - **services**: the HTTP API client, the session store, and the key-value
//!   storage boundary it persists through
//! - **ui**: screens, widgets, and theme
//! - **utils**: validation, derived spending aggregates, the global Tokio
//!   runtime, and logging setup
//!
//! ## Core Concepts
//!
//! The UI thread renders from `Arc<RwLock<AppState>>`. User actions run
//! through handlers that validate input and spawn network tasks onto the
//! global Tokio runtime; task results come back as [`app::AppEvent`] messages
//! over an unbounded channel drained once per frame.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;
