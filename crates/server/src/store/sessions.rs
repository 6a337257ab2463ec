//! Durable admin session store with lazy expiry.
//!
//! Tokens map to `{created, expires}` records in one JSON document. There
//! is no background sweep: an expired session is purged the first time it
//! is looked up after its expiry instant.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use rand::RngCore;
use tokio::sync::Mutex;

use legacy_store_core::{Session, SessionToken};

use super::StoreError;

/// Bytes of CSPRNG output per token (hex-encoded to 64 characters).
const TOKEN_BYTES: usize = 32;

/// File-backed session store.
pub struct SessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SessionStore {
    /// Create a store backed by the given snapshot file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Issue a fresh session valid for 24 hours and persist it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if persisting the new session fails; no
    /// token is handed out in that case.
    pub async fn issue(&self) -> Result<SessionToken, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load_map().await;
        let token = generate_token();
        sessions.insert(token.clone(), Session::issued_at(Utc::now()));
        self.save_map(&sessions).await?;

        tracing::info!("admin session issued");
        Ok(token)
    }

    /// Whether the token names a live session.
    ///
    /// Returns `false` for an absent token. A present-but-expired session
    /// is deleted (persisting the deletion) before returning `false` —
    /// lazy expiry, no background sweep.
    pub async fn validate(&self, token: &SessionToken) -> bool {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load_map().await;
        match sessions.get(token) {
            None => false,
            Some(session) if session.is_expired(Utc::now()) => {
                sessions.remove(token);
                if let Err(err) = self.save_map(&sessions).await {
                    tracing::warn!(error = %err, "failed to persist expired session removal");
                }
                false
            }
            Some(_) => true,
        }
    }

    /// Delete the session if present; a no-op for unknown tokens.
    pub async fn revoke(&self, token: &SessionToken) {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load_map().await;
        if sessions.remove(token).is_some() {
            if let Err(err) = self.save_map(&sessions).await {
                tracing::warn!(error = %err, "failed to persist session revocation");
            }
        }
    }

    /// Read the token map; a missing or corrupt file is an empty map.
    async fn load_map(&self) -> HashMap<SessionToken, Session> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|err| {
                tracing::warn!(error = %err, path = %self.path.display(), "corrupt sessions file, starting empty");
                HashMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "failed to read sessions file, starting empty");
                HashMap::new()
            }
        }
    }

    /// Overwrite the snapshot with the full token map.
    async fn save_map(&self, sessions: &HashMap<SessionToken, Session>) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(sessions)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

/// Generate a 256-bit token from the thread CSPRNG.
fn generate_token() -> SessionToken {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    SessionToken::new(hex::encode(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn store(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join(".sessions.json"))
    }

    /// Write a session with an arbitrary expiry straight into the snapshot
    /// file, the way a crashed-and-restarted server would find it.
    fn write_session(dir: &tempfile::TempDir, token: &str, session: Session) {
        let mut map = HashMap::new();
        map.insert(SessionToken::from(token), session);
        let data = serde_json::to_string_pretty(&map).unwrap();
        std::fs::write(dir.path().join(".sessions.json"), data).unwrap();
    }

    #[test]
    fn test_generated_token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.as_str().len(), 64);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_tokens_are_distinct() {
        assert_ne!(generate_token(), generate_token());
    }

    #[tokio::test]
    async fn test_issue_then_validate() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let token = store.issue().await.unwrap();
        assert!(store.validate(&token).await);
        // Persisted: a fresh store over the same file sees it too.
        let reopened = SessionStore::new(dir.path().join(".sessions.json"));
        assert!(reopened.validate(&token).await);
    }

    #[tokio::test]
    async fn test_validate_unknown_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(!store.validate(&SessionToken::from("deadbeef")).await);
    }

    #[tokio::test]
    async fn test_expired_session_is_lazily_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let expired = Session::issued_at(Utc::now() - TimeDelta::hours(24) - TimeDelta::seconds(1));
        write_session(&dir, "aa11", expired);

        let store = store(&dir);
        assert!(!store.validate(&SessionToken::from("aa11")).await);

        // The deletion was persisted: the file no longer holds the token.
        let data = std::fs::read_to_string(dir.path().join(".sessions.json")).unwrap();
        assert!(!data.contains("aa11"));
    }

    #[tokio::test]
    async fn test_session_valid_until_expiry_instant() {
        let dir = tempfile::tempdir().unwrap();
        // Issued 23h59m ago: still strictly before expires.
        let live = Session::issued_at(Utc::now() - TimeDelta::hours(23) - TimeDelta::minutes(59));
        write_session(&dir, "bb22", live);

        let store = store(&dir);
        assert!(store.validate(&SessionToken::from("bb22")).await);
    }

    #[tokio::test]
    async fn test_revoke_deletes_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let token = store.issue().await.unwrap();
        store.revoke(&token).await;
        assert!(!store.validate(&token).await);

        // Revoking again is a no-op.
        store.revoke(&token).await;
        assert!(!store.validate(&token).await);
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert!(!store.validate(&SessionToken::from("anything")).await);
        // validate on an empty store never creates the file
        assert!(!dir.path().join(".sessions.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".sessions.json"), "{{{{").unwrap();
        let store = store(&dir);

        assert!(!store.validate(&SessionToken::from("aa")).await);
        // issue still works, replacing the corrupt snapshot
        let token = store.issue().await.unwrap();
        assert!(store.validate(&token).await);
    }
}
