//! # User Action Handlers
//!
//! Handlers validate input on the UI thread, mutate state, and spawn network
//! tasks. Anything that fails validation never leaves the process.

pub(crate) mod auth;
pub(crate) mod expenses;
pub(crate) mod files;
pub(crate) mod navigation;
pub(crate) mod profile;
