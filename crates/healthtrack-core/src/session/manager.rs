//! Session lifecycle management.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::AuthApi;
use crate::auth::{LoginRequest, RegistrationData};
use crate::error::{HealthTrackError, Result};
use crate::session::model::Session;
use crate::session::repository::SessionRepository;
use crate::user::{Role, UserProfile};

/// Single source of truth for "who is logged in".
///
/// `SessionManager` is responsible for:
/// - Restoring a persisted session at startup
/// - Exchanging credentials for a session (login/register)
/// - Keeping the in-memory session and the durable copy in sync
/// - Clearing both on logout
///
/// Consumers read the current user and bearer token through the accessors
/// here rather than reaching into storage themselves, so the token and
/// user record can never be observed out of sync.
///
/// # Concurrent attempts
///
/// Login attempts carry a monotonically increasing generation. A response
/// that resolves after a newer attempt has started is discarded instead of
/// overwriting the newer session, so the latest attempt wins
/// deterministically rather than by network timing.
pub struct SessionManager {
    auth_api: Arc<dyn AuthApi>,
    repository: Arc<dyn SessionRepository>,
    current: RwLock<Option<Session>>,
    attempt: AtomicU64,
}

impl SessionManager {
    /// Creates a manager over an authentication API and a session store.
    pub fn new(auth_api: Arc<dyn AuthApi>, repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            auth_api,
            repository,
            current: RwLock::new(None),
            attempt: AtomicU64::new(0),
        }
    }

    /// Attempts to restore the persisted session at startup.
    ///
    /// Missing or unreadable stored data degrades to the logged-out state;
    /// startup is never blocked by a corrupt local record.
    pub async fn restore(&self) -> Option<Session> {
        match self.repository.load().await {
            Ok(Some(session)) => {
                info!(user_id = session.user.user_id, "Restored persisted session");
                *self.current.write().await = Some(session.clone());
                Some(session)
            }
            Ok(None) => {
                debug!("No persisted session found");
                None
            }
            Err(err) => {
                warn!("Ignoring unreadable persisted session: {err}");
                None
            }
        }
    }

    /// Exchanges credentials for an authenticated session.
    ///
    /// On success the session is persisted and installed; on any failure
    /// both the in-memory state and the durable copy are left untouched.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Session> {
        let request = LoginRequest::new(email, password, role)?;
        let attempt = self.next_attempt();
        debug!(%role, "Starting login attempt");

        let session = self.auth_api.login(&request).await?;
        self.commit(attempt, session).await
    }

    /// Registers a new account and logs it in.
    ///
    /// Role-specific required fields are checked locally before any
    /// network call; the response then follows the same normalization and
    /// persistence path as [`login`](Self::login).
    pub async fn register(&self, data: RegistrationData) -> Result<Session> {
        let request = data.into_request()?;
        let attempt = self.next_attempt();
        debug!(role = %request.role, "Starting registration attempt");

        let session = self.auth_api.signup(&request).await?;
        self.commit(attempt, session).await
    }

    /// Clears the session, in memory and on disk.
    ///
    /// Remote token revocation is best-effort: the local session is
    /// cleared regardless of whether the backend call succeeds. Logging
    /// out while logged out is a no-op.
    pub async fn logout(&self) {
        let mut current = self.current.write().await;

        if let Some(session) = current.take() {
            if let Err(err) = self.auth_api.logout(&session.token).await {
                warn!("Remote logout failed, clearing local session anyway: {err}");
            }
            info!(user_id = session.user.user_id, "Logged out");
        }

        if let Err(err) = self.repository.clear().await {
            warn!("Failed to clear persisted session: {err}");
        }
    }

    /// Returns the current session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Returns the authenticated user, if any.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.current.read().await.as_ref().map(|s| s.user.clone())
    }

    /// Returns the bearer token for authenticated requests, if any.
    ///
    /// This accessor is the sanctioned route to the token; nothing else
    /// reads the durable copy directly.
    pub async fn auth_token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    /// True iff a session with a non-empty token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(Session::is_authenticated)
    }

    fn next_attempt(&self) -> u64 {
        self.attempt.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Persists and installs a freshly authenticated session, unless a
    /// newer attempt has started in the meantime.
    async fn commit(&self, attempt: u64, session: Session) -> Result<Session> {
        let mut current = self.current.write().await;

        if self.attempt.load(Ordering::SeqCst) != attempt {
            warn!("Discarding authentication response superseded by a newer attempt");
            return Err(HealthTrackError::internal(
                "authentication attempt superseded by a newer one",
            ));
        }

        self.repository.save(&session).await?;
        *current = Some(session.clone());
        info!(
            user_id = session.user.user_id,
            role = %session.user.role,
            "Session established"
        );
        Ok(session)
    }
}
