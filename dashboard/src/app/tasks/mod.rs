//! # Async Background Tasks
//!
//! Network work spawned onto the global Tokio runtime. Each task makes a
//! single backend call and reports the result over the event channel; the
//! event handler applies it to state on the main thread.

pub(crate) mod expenses;
pub(crate) mod files;
pub(crate) mod profile;
pub(crate) mod session;
