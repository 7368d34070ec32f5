//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the expense backend over REST.
//!
//! ## Module Organization
//!
//! - [`envelope`] - the `{success, message, data}` response wrapper and error bodies
//! - [`auth`] - signup, login, and user identity DTOs
//! - [`expense`] - expense records, payloads, and attachment references
//! - [`profile`] - profile read/update DTOs
//! - [`files`] - object-store upload and listing DTOs
//!
//! ## Serialization Format
//!
//! All types implement both `Serialize` and `Deserialize`. Optional fields are
//! omitted from JSON when `None`. Expense records use camelCase on the wire;
//! the auth and file endpoints use snake_case (the backend predates a casing
//! convention, and the client follows it verbatim).

pub mod auth;
pub mod envelope;
pub mod expense;
pub mod files;
pub mod profile;

pub use auth::*;
pub use envelope::*;
pub use expense::*;
pub use files::*;
pub use profile::*;
