//! Session repository trait.
//!
//! Defines the interface for durable session persistence.

use async_trait::async_trait;

use super::model::Session;
use crate::error::Result;

/// An abstract repository for the single persisted session.
///
/// This trait defines the contract for persisting and restoring the
/// authenticated session, decoupling the session manager from the specific
/// storage mechanism (filesystem key pair, in-memory store in tests, a
/// platform keychain, ...).
///
/// # Implementation Notes
///
/// Implementations must keep the token and the user record in sync: `load`
/// may only produce a session when both halves are present, and `save` must
/// never leave a token on disk without its user record.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: a complete token/user pair was found
    /// - `Ok(None)`: no session is persisted
    /// - `Err(_)`: the persisted data exists but could not be read or parsed
    async fn load(&self) -> Result<Option<Session>>;

    /// Persists the session, replacing any previous one wholesale.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session. Clearing an empty store is a no-op.
    async fn clear(&self) -> Result<()>;
}
