//! Authentication endpoint client.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::client::ApiClient;
use crate::auth::{normalize_auth_response, LoginRequest, SignupRequest};
use crate::error::Result;
use crate::session::Session;

/// Remote authentication operations, as the session manager sees them.
///
/// Implementations return fully normalized sessions; the manager never
/// touches provider field names. The trait exists so tests can drive the
/// manager against an in-memory stub.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a session via `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<Session>;

    /// Creates an account and logs it in via `POST /auth/signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<Session>;

    /// Revokes the token server-side via `POST /auth/logout`.
    async fn logout(&self, token: &str) -> Result<()>;
}

/// [`AuthApi`] implementation backed by the real backend.
#[derive(Clone)]
pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        debug!(role = %request.role, "Sending login request");
        let body = self.api.post("auth/login", request).await?;
        let session = normalize_auth_response(&body, Some(&request.email))?;
        info!(user_id = session.user.user_id, "Login accepted by backend");
        Ok(session)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session> {
        debug!(role = %request.role, "Sending signup request");
        let body = self.api.post("auth/signup", request).await?;
        let session = normalize_auth_response(&body, Some(&request.email))?;
        info!(user_id = session.user.user_id, "Signup accepted by backend");
        Ok(session)
    }

    async fn logout(&self, token: &str) -> Result<()> {
        self.api.post_authed_empty("auth/logout", token).await?;
        Ok(())
    }
}
