//! # Utility Functions
//!
//! - `aggregate`: derived spending aggregates for the overview charts
//! - `logger`: file-based tracing setup
//! - `runtime`: the global Tokio runtime network tasks spawn onto
//! - `validation`: pure input validation for forms

pub mod aggregate;
pub mod logger;
pub mod runtime;
pub mod validation;
