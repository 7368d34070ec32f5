//! # Key-Value Storage Boundary
//!
//! The session is persisted through this small interface rather than ad-hoc
//! file access, so production code writes a JSON file while tests swap in an
//! in-memory map. Values are plain strings (tokens, RFC 3339 instants, JSON
//! snapshots), read and written in full units.

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::core::error::{AppError, Result};

/// Storage key for the raw bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the absolute token expiry (RFC 3339).
pub const TOKEN_EXPIRY_KEY: &str = "tokenExpiry";
/// Storage key for the cached user snapshot (JSON).
pub const USER_DATA_KEY: &str = "user_data";

/// Minimal key-value persistence contract.
///
/// Mutations are infallible from the caller's point of view; write failures
/// are logged at the boundary and the in-memory view stays authoritative for
/// the rest of the process lifetime.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// JSON-file-backed storage. The whole map is rewritten on every mutation,
/// so a reader never observes a partially written entry.
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Default store location, next to the binary's other local files.
    pub fn default_path() -> PathBuf {
        PathBuf::from("./dashboard-store.json")
    }

    /// Open the store, falling back to an empty map when the file is missing
    /// or unreadable.
    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Store file is corrupt, starting empty");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read store file, starting empty");
                HashMap::new()
            }
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| AppError::Storage(e.to_string()))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            tracing::error!(path = %self.path.display(), key, error = %e, "Failed to persist store");
        }
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            if let Err(e) = self.persist(&entries) {
                tracing::error!(path = %self.path.display(), key, error = %e, "Failed to persist store");
            }
        }
    }
}

/// In-memory storage used by tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.get("missing").is_none());

        storage.set("k", "v1");
        assert_eq!(storage.get("k").as_deref(), Some("v1"));

        storage.set("k", "v2");
        assert_eq!(storage.get("k").as_deref(), Some("v2"));

        storage.remove("k");
        assert!(storage.get("k").is_none());
    }
}
