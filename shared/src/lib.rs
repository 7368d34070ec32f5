//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the dashboard client and the
//! remote expense API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: the `{success, message, data}` response wrapper
//!   - **[`dto::auth`]**: authentication and user identity DTOs
//!   - **[`dto::expense`]**: expense records and attachment references
//!   - **[`dto::profile`]**: profile update payloads
//!   - **[`dto::files`]**: object-store upload and listing DTOs
//! - **[`utils`]**: formatting helpers shared by the screens
//!
//! ## Wire Format
//!
//! The backend is not uniform about casing: expense records travel in
//! camelCase while the auth and file-store endpoints use snake_case. Each DTO
//! module pins its own `rename_all` accordingly, so callers never touch field
//! renames.

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
