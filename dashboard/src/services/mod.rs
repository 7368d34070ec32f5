//! # External Integrations
//!
//! - `api`: HTTP client for the expense backend
//! - `session`: process-wide authentication state with explicit lifecycle
//! - `storage`: the key-value persistence boundary shared by both

pub mod api;
pub mod session;
pub mod storage;
