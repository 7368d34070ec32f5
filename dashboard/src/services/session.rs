//! # Session Store
//!
//! Process-wide authentication state with an explicit lifecycle:
//!
//! ```text
//! anonymous ──login/signup──▶ authenticated ──logout/restore failure──▶ anonymous
//! ```
//!
//! Exactly three storage keys persist a session (the raw token, its absolute
//! expiry, and a JSON snapshot of the user), and they are always written and
//! cleared together. The snapshot exists for optimistic display between full
//! syncs; it is never an authorization decision point, because the backend
//! re-validates the token on every protected call.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::core::service::ApiService;
use crate::services::storage::{
    KeyValueStorage, AUTH_TOKEN_KEY, TOKEN_EXPIRY_KEY, USER_DATA_KEY,
};
use shared::{AuthResponse, UserInfo};

/// An active authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    /// Only available in the login/signup response; not persisted, so a
    /// restored session carries `None`.
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub user: UserInfo,
}

/// What a freshly started process should do with persisted session state.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    Anonymous,
    Authenticated {
        token: String,
        expires_at: DateTime<Utc>,
        user: UserInfo,
    },
}

/// The single owned holder of authentication state.
///
/// Mutations go through the narrow contract here; reads are cheap accessors.
/// The storage handle is shared with the API client, which reads the token
/// key on every call but never writes it.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    session: Option<Session>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    pub fn storage(&self) -> Arc<dyn KeyValueStorage> {
        self.storage.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Transition to authenticated from a successful login/signup response,
    /// persisting the three session keys.
    pub fn establish(&mut self, auth: &AuthResponse) {
        let expires_at = Utc::now() + Duration::seconds(auth.expires_in);
        self.storage.set(AUTH_TOKEN_KEY, &auth.token);
        self.storage.set(TOKEN_EXPIRY_KEY, &expires_at.to_rfc3339());
        persist_user_snapshot(self.storage.as_ref(), &auth.user);
        self.session = Some(Session {
            token: auth.token.clone(),
            refresh_token: auth.refresh_token.clone(),
            expires_at,
            user: auth.user.clone(),
        });
        tracing::info!(user = %auth.user.email, "Session established");
    }

    /// Transition to anonymous, clearing all persisted session keys.
    pub fn clear(&mut self) {
        clear_persisted(self.storage.as_ref());
        self.session = None;
        tracing::info!("Session cleared");
    }

    /// Apply the result of [`restore_session`] to the in-memory state.
    /// Storage was already updated by the restore itself.
    pub fn apply_restore(&mut self, outcome: RestoreOutcome) {
        self.session = match outcome {
            RestoreOutcome::Anonymous => None,
            RestoreOutcome::Authenticated {
                token,
                expires_at,
                user,
            } => Some(Session {
                token,
                refresh_token: None,
                expires_at,
                user,
            }),
        };
    }

    /// Refresh the cached user snapshot after a profile update.
    pub fn refresh_user(&mut self, user: UserInfo) {
        persist_user_snapshot(self.storage.as_ref(), &user);
        if let Some(session) = &mut self.session {
            session.user = user;
        }
    }
}

/// Decide what to do with persisted session state on startup.
///
/// With a stored, unexpired token the current user is fetched to refresh the
/// snapshot. A 404 from that lookup means the endpoint is not implemented
/// server-side and falls back to the cached snapshot rather than forcing
/// logout; any other failure clears the session.
pub async fn restore_session(
    storage: &dyn KeyValueStorage,
    api: &dyn ApiService,
) -> RestoreOutcome {
    let Some(token) = storage.get(AUTH_TOKEN_KEY) else {
        return RestoreOutcome::Anonymous;
    };

    let expires_at = match stored_expiry(storage) {
        Some(expiry) if expiry > Utc::now() => expiry,
        _ => {
            tracing::info!("Stored token expired or unreadable, clearing session");
            clear_persisted(storage);
            return RestoreOutcome::Anonymous;
        }
    };

    match api.get_me().await {
        Ok(user) => {
            persist_user_snapshot(storage, &user);
            RestoreOutcome::Authenticated {
                token,
                expires_at,
                user,
            }
        }
        Err(err) if err.is_not_found() => match cached_user(storage) {
            Some(user) => {
                tracing::warn!("Current-user endpoint unavailable, using cached identity");
                RestoreOutcome::Authenticated {
                    token,
                    expires_at,
                    user,
                }
            }
            None => {
                clear_persisted(storage);
                RestoreOutcome::Anonymous
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "Session restore failed, clearing persisted session");
            clear_persisted(storage);
            RestoreOutcome::Anonymous
        }
    }
}

fn persist_user_snapshot(storage: &dyn KeyValueStorage, user: &UserInfo) {
    match serde_json::to_string(user) {
        Ok(json) => storage.set(USER_DATA_KEY, &json),
        Err(e) => tracing::error!(error = %e, "Failed to serialize user snapshot"),
    }
}

fn clear_persisted(storage: &dyn KeyValueStorage) {
    storage.remove(AUTH_TOKEN_KEY);
    storage.remove(TOKEN_EXPIRY_KEY);
    storage.remove(USER_DATA_KEY);
}

fn cached_user(storage: &dyn KeyValueStorage) -> Option<UserInfo> {
    let json = storage.get(USER_DATA_KEY)?;
    serde_json::from_str(&json).ok()
}

fn stored_expiry(storage: &dyn KeyValueStorage) -> Option<DateTime<Utc>> {
    let raw = storage.get(TOKEN_EXPIRY_KEY)?;
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{test_auth_response, test_user, FakeBackend};
    use crate::services::api::ApiError;
    use crate::services::storage::MemoryStorage;

    fn store() -> (Arc<MemoryStorage>, SessionStore) {
        let storage = Arc::new(MemoryStorage::new());
        let session = SessionStore::new(storage.clone() as Arc<dyn KeyValueStorage>);
        (storage, session)
    }

    #[test]
    fn establish_persists_exactly_three_keys_matching_the_response() {
        let (storage, mut session) = store();
        assert!(!session.is_authenticated());

        let auth = test_auth_response();
        session.establish(&auth);

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("token-123"));
        assert_eq!(storage.get(AUTH_TOKEN_KEY).as_deref(), Some("token-123"));

        let expiry = stored_expiry(storage.as_ref()).expect("expiry persisted");
        let lifetime = expiry - Utc::now();
        assert!(lifetime > Duration::seconds(3590) && lifetime <= Duration::seconds(3600));

        let snapshot: UserInfo =
            serde_json::from_str(&storage.get(USER_DATA_KEY).expect("snapshot persisted"))
                .expect("snapshot is valid JSON");
        assert_eq!(snapshot, auth.user);
    }

    #[test]
    fn clear_removes_all_keys_regardless_of_prior_state() {
        let (storage, mut session) = store();
        session.establish(&test_auth_response());
        session.clear();

        assert!(!session.is_authenticated());
        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
        assert!(storage.get(TOKEN_EXPIRY_KEY).is_none());
        assert!(storage.get(USER_DATA_KEY).is_none());

        // Clearing an already-anonymous store is a no-op, not a panic.
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn restore_without_token_is_anonymous() {
        let (storage, _) = store();
        let api = FakeBackend::new();
        let outcome = restore_session(storage.as_ref(), &api).await;
        assert_eq!(outcome, RestoreOutcome::Anonymous);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn restore_with_valid_token_refreshes_snapshot() {
        let (storage, mut session) = store();
        session.establish(&test_auth_response());

        let api = FakeBackend::new();
        let outcome = restore_session(storage.as_ref(), &api).await;
        match &outcome {
            RestoreOutcome::Authenticated { token, user, .. } => {
                assert_eq!(token, "token-123");
                assert_eq!(user, &test_user());
            }
            RestoreOutcome::Anonymous => panic!("expected authenticated outcome"),
        }

        session.apply_restore(outcome);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn restore_tolerates_missing_me_endpoint() {
        let (storage, mut session) = store();
        session.establish(&test_auth_response());

        let api = FakeBackend::new();
        *api.me_response.lock() = Err(ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        });

        let outcome = restore_session(storage.as_ref(), &api).await;
        match outcome {
            RestoreOutcome::Authenticated { ref user, .. } => assert_eq!(user, &test_user()),
            RestoreOutcome::Anonymous => panic!("404 must fall back to the cached snapshot"),
        }
        // Session keys survive the fallback.
        assert!(storage.get(AUTH_TOKEN_KEY).is_some());
        assert!(storage.get(USER_DATA_KEY).is_some());
    }

    #[tokio::test]
    async fn restore_clears_session_on_other_failures() {
        let (storage, mut session) = store();
        session.establish(&test_auth_response());

        let api = FakeBackend::new();
        *api.me_response.lock() = Err(ApiError::Status {
            status: 401,
            message: "token revoked".to_string(),
        });

        let outcome = restore_session(storage.as_ref(), &api).await;
        assert_eq!(outcome, RestoreOutcome::Anonymous);
        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
        assert!(storage.get(TOKEN_EXPIRY_KEY).is_none());
        assert!(storage.get(USER_DATA_KEY).is_none());
    }

    #[tokio::test]
    async fn restore_clears_expired_token_without_a_network_call() {
        let (storage, _) = store();
        storage.set(AUTH_TOKEN_KEY, "stale-token");
        let expired = Utc::now() - Duration::hours(1);
        storage.set(TOKEN_EXPIRY_KEY, &expired.to_rfc3339());

        let api = FakeBackend::new();
        let outcome = restore_session(storage.as_ref(), &api).await;
        assert_eq!(outcome, RestoreOutcome::Anonymous);
        assert_eq!(api.call_count(), 0);
        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
    }

    #[test]
    fn refresh_user_updates_snapshot_and_session() {
        let (storage, mut session) = store();
        session.establish(&test_auth_response());

        let mut updated = test_user();
        updated.name = "Alice Cooper".to_string();
        session.refresh_user(updated.clone());

        assert_eq!(session.user(), Some(&updated));
        let snapshot: UserInfo =
            serde_json::from_str(&storage.get(USER_DATA_KEY).unwrap()).unwrap();
        assert_eq!(snapshot, updated);
    }
}
