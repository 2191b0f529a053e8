//! Session domain model.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// The locally-known authentication state.
///
/// A session pairs the opaque bearer token issued by the authentication
/// endpoint with a denormalized snapshot of the authenticated user. The two
/// are written and cleared together; a token without a user record (or the
/// reverse) is never observable through this type.
///
/// Sessions are replaced wholesale on login/register and cleared wholesale
/// on logout. No field is mutated in place between those transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential, sent as `Authorization: Bearer <token>` on
    /// every authenticated request.
    pub token: String,
    /// Snapshot of the authenticated principal.
    pub user: UserProfile,
}

impl Session {
    /// Creates a session from a freshly issued token and normalized user.
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// True iff a non-empty bearer token is held.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
