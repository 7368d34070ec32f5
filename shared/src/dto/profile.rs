//! # Profile DTOs
//!
//! The `/profiles/me` endpoints read and write the caller's own identity
//! record; reads return [`crate::dto::auth::UserInfo`].

use serde::{Deserialize, Serialize};

/// Update payload for `PUT /profiles/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}
