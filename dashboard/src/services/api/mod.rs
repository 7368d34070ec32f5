//! # Backend API Client Module
//!
//! HTTP client for the remote expense API. Single point of outbound
//! communication: every call goes through [`ApiClient::request`], which
//! attaches the bearer token from persistent storage and normalizes failures
//! into [`ApiError`].
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, request helpers, error normalization
//! ├── auth.rs     - Authentication endpoints (signup, login, me)
//! ├── expenses.rs - Expense CRUD endpoints
//! ├── profile.rs  - Profile read/update endpoints
//! └── files.rs    - Object-store upload and listing endpoints
//! ```

pub mod auth;
pub mod client;
pub mod expenses;
pub mod files;
pub mod profile;

pub use client::{ApiClient, ApiError};
