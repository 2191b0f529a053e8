//! Filesystem-backed session persistence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use healthtrack_core::error::Result;
use healthtrack_core::session::{Session, SessionRepository};
use healthtrack_core::user::UserProfile;

use crate::paths::HealthTrackPaths;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// Persists the session as a pair of files in a dedicated directory:
/// the raw bearer token and the canonical user record as JSON.
///
/// The pair is the durable equivalent of the original clients' two
/// storage keys. `load` only produces a session when both halves are
/// present; `save` writes the user record before the token so a crash
/// between the two writes can never leave a token without its user.
pub struct FileSessionStore {
    base_dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (`~/.healthtrack/session`).
    pub fn default_location() -> Result<Self> {
        Self::new(HealthTrackPaths::session_dir()?)
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.base_dir.join(USER_FILE)
    }
}

#[async_trait]
impl SessionRepository for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>> {
        let token_path = self.token_path();
        let user_path = self.user_path();

        if !token_path.exists() || !user_path.exists() {
            debug!("No persisted session at {:?}", self.base_dir);
            return Ok(None);
        }

        let token = tokio::fs::read_to_string(&token_path).await?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }

        let raw = tokio::fs::read_to_string(&user_path).await?;
        let user: UserProfile = serde_json::from_str(&raw)?;

        Ok(Some(Session::new(token, user)))
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(&session.user)?;
        tokio::fs::write(self.user_path(), json).await?;
        tokio::fs::write(self.token_path(), &session.token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        for path in [self.token_path(), self.user_path()] {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthtrack_core::user::{Role, Specialization};
    use tempfile::TempDir;

    fn test_session() -> Session {
        Session::new(
            "abc",
            UserProfile {
                user_id: 7,
                name: "Dr. Smith".to_string(),
                email: "doc@example.com".to_string(),
                role: Role::Doctor,
                birthday: None,
                specialization: Some(Specialization {
                    id: 2,
                    name: "Cardiology".to_string(),
                }),
                phone_number: Some("555-0100".to_string()),
            },
        )
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        let session = test_session();
        store.save(&session).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn empty_store_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn token_without_user_record_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        std::fs::write(temp_dir.path().join(TOKEN_FILE), "abc").unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn blank_token_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        std::fs::write(temp_dir.path().join(TOKEN_FILE), "  \n").unwrap();
        std::fs::write(temp_dir.path().join(USER_FILE), "{}").unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_user_record_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        std::fs::write(temp_dir.path().join(TOKEN_FILE), "abc").unwrap();
        std::fs::write(temp_dir.path().join(USER_FILE), "not json at all").unwrap();

        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn clear_removes_both_files_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        store.save(&test_session()).await.unwrap();
        store.clear().await.unwrap();

        assert!(!temp_dir.path().join(TOKEN_FILE).exists());
        assert!(!temp_dir.path().join(USER_FILE).exists());
        assert_eq!(store.load().await.unwrap(), None);

        // Clearing an already-empty store is a no-op.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn save_replaces_the_previous_session_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();

        store.save(&test_session()).await.unwrap();

        let mut replacement = test_session();
        replacement.token = "new-token".to_string();
        replacement.user.name = "Dr. Jones".to_string();
        store.save(&replacement).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, "new-token");
        assert_eq!(loaded.user.name, "Dr. Jones");
    }
}
