// Authentication and session handling.
//
// Credential checking sits behind the `Authenticator` trait so the single
// built-in credential pair can later be swapped for a real backend without
// touching the screens. The session is a stored user record: present means
// logged in, absent means logged out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::store::{load_typed, save_typed, SnapshotStore, StoreError, SESSION_KEY};

// ---------------------------------------------------------------------------
// User record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Authenticator port
// ---------------------------------------------------------------------------

/// Credential check. `Ok(None)` means the credentials were rejected; errors
/// are reserved for backend failures.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<Option<User>, AuthError>;
}

/// The built-in single-account authenticator.
///
/// Accepts exactly `admin` / `admin123` after a fixed pause, mimicking a
/// round trip to an auth service.
pub struct StaticAuthenticator {
    delay: Duration,
}

impl StaticAuthenticator {
    pub const USERNAME: &'static str = "admin";
    const PASSWORD: &'static str = "admin123";

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn login(&self, username: &str, password: &str) -> Result<Option<User>, AuthError> {
        tokio::time::sleep(self.delay).await;

        if username == Self::USERNAME && password == Self::PASSWORD {
            Ok(Some(User {
                id: "1".into(),
                username: Self::USERNAME.into(),
                role: Role::Admin,
            }))
        } else {
            Ok(None)
        }
    }
}

// ---------------------------------------------------------------------------
// SessionManager
// ---------------------------------------------------------------------------

/// Tracks the signed-in user and mirrors it to storage so a restart keeps
/// the session alive.
pub struct SessionManager {
    store: Arc<dyn SnapshotStore>,
    user: Option<User>,
}

impl SessionManager {
    /// Restore the session from storage. An unreadable session record is
    /// treated as logged out.
    pub fn restore(store: Arc<dyn SnapshotStore>) -> Self {
        let user = match load_typed::<User>(store.as_ref(), SESSION_KEY) {
            Ok(user) => user,
            Err(e) => {
                warn!("discarding unreadable session record: {e}");
                None
            }
        };
        if let Some(user) = &user {
            info!(username = %user.username, "session restored");
        }
        Self { store, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.user.as_ref(), Some(u) if u.role == Role::Admin)
    }

    /// Run the credential check and, on success, persist the session.
    /// Returns whether the credentials were accepted.
    pub async fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        username: &str,
        password: &str,
    ) -> Result<bool, AuthError> {
        match authenticator.login(username, password).await? {
            Some(user) => {
                save_typed(self.store.as_ref(), SESSION_KEY, &user)?;
                info!(username = %user.username, "login accepted");
                self.user = Some(user);
                Ok(true)
            }
            None => {
                info!(username, "login rejected");
                Ok(false)
            }
        }
    }

    /// Drop the session and remove the stored record.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.user = None;
        self.store.remove(SESSION_KEY)?;
        info!("logged out");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session(store: &Arc<MemoryStore>) -> SessionManager {
        SessionManager::restore(Arc::clone(store) as Arc<dyn SnapshotStore>)
    }

    #[tokio::test(start_paused = true)]
    async fn accepts_the_built_in_credentials() {
        let store = Arc::new(MemoryStore::new());
        let auth = StaticAuthenticator::new(Duration::ZERO);
        let mut session = session(&store);

        assert!(session.login(&auth, "admin", "admin123").await.unwrap());
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        let user = session.user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.username, "admin");
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_every_other_pair() {
        let store = Arc::new(MemoryStore::new());
        let auth = StaticAuthenticator::new(Duration::ZERO);
        let mut session = session(&store);

        for (u, p) in [
            ("admin", "admin"),
            ("admin", ""),
            ("Admin", "admin123"),
            ("admin", "ADMIN123"),
            ("root", "admin123"),
        ] {
            assert!(!session.login(&auth, u, p).await.unwrap(), "{u}/{p}");
            assert!(!session.is_authenticated());
        }
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn session_survives_a_restart() {
        let store = Arc::new(MemoryStore::new());
        let auth = StaticAuthenticator::new(Duration::ZERO);

        let mut first = session(&store);
        first.login(&auth, "admin", "admin123").await.unwrap();
        drop(first);

        let restored = session(&store);
        assert!(restored.is_admin());
        assert_eq!(restored.user().unwrap().username, "admin");
    }

    #[tokio::test(start_paused = true)]
    async fn logout_removes_the_stored_record() {
        let store = Arc::new(MemoryStore::new());
        let auth = StaticAuthenticator::new(Duration::ZERO);

        let mut session = session(&store);
        session.login(&auth, "admin", "admin123").await.unwrap();
        assert_eq!(store.len(), 1);

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert!(store.is_empty());

        let reopened = SessionManager::restore(Arc::clone(&store) as Arc<dyn SnapshotStore>);
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn corrupt_session_record_means_logged_out() {
        // A bare number cannot decode into a user record. (A JSON array
        // would: serde reads struct fields from a sequence in order.)
        let store = Arc::new(MemoryStore::new());
        store.save(SESSION_KEY, &serde_json::json!(42)).unwrap();
        let session = session(&store);
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }
}
