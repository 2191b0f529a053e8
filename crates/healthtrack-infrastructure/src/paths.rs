//! Unified path management for the client's local files.
//!
//! All durable client state lives under a single dot-directory in the
//! user's home:
//!
//! ```text
//! ~/.healthtrack/
//! ├── config.toml          # API settings
//! └── session/
//!     ├── token            # bearer credential
//!     └── user.json        # canonical user record
//! ```

use std::path::PathBuf;

use healthtrack_core::error::{HealthTrackError, Result};

/// Unified path management for the HealthTrack client.
pub struct HealthTrackPaths;

impl HealthTrackPaths {
    /// Returns the client's base directory (`~/.healthtrack`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn base_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| HealthTrackError::storage("Failed to get home directory"))?;
        Ok(home_dir.join(".healthtrack"))
    }

    /// Returns the path to the configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the persisted session key pair.
    pub fn session_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("session"))
    }
}
