//! Profile use cases.

use std::sync::Arc;

use healthtrack_core::api::{ApiClient, UserClient};
use healthtrack_core::error::{HealthTrackError, Result};
use healthtrack_core::session::SessionManager;
use healthtrack_core::user::{ProfileUpdate, UserProfile};

/// Reads and edits the authenticated account's profile.
///
/// Profile edits are applied server-side only; the session snapshot is
/// deliberately not mutated (it is replaced wholesale at the next login).
pub struct ProfileService {
    session: Arc<SessionManager>,
    client: UserClient,
}

impl ProfileService {
    pub fn new(session: Arc<SessionManager>, api: Arc<ApiClient>) -> Self {
        Self {
            session,
            client: UserClient::new(api),
        }
    }

    /// Fetches the profile as currently stored by the backend.
    pub async fn get(&self) -> Result<UserProfile> {
        let token = self.require_token().await?;
        self.client.get_profile(&token).await
    }

    /// Applies a partial profile update.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let token = self.require_token().await?;
        self.client.update_profile(&token, update).await
    }

    async fn require_token(&self) -> Result<String> {
        self.session
            .auth_token()
            .await
            .ok_or(HealthTrackError::NotAuthenticated)
    }
}
