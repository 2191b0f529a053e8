//! Configuration loading.
//!
//! Reads `config.toml` from the client's dot-directory, falling back to
//! defaults when the file is missing, and honoring the
//! `HEALTHTRACK_API_URL` environment variable over both.

use std::path::Path;

use tracing::debug;

use healthtrack_core::config::ClientConfig;
use healthtrack_core::error::Result;

use crate::paths::HealthTrackPaths;

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "HEALTHTRACK_API_URL";

/// Loads and persists the client configuration file.
pub struct ConfigService;

impl ConfigService {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields defaults; it is not an error.
    pub fn load() -> Result<ClientConfig> {
        Self::load_from(HealthTrackPaths::config_file()?)
    }

    /// Loads the configuration from a specific path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<ClientConfig> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str(&raw)?
        } else {
            debug!("No config file at {path:?}, using defaults");
            ClientConfig::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api.base_url = url;
            }
        }

        Ok(config)
    }

    /// Writes the configuration, creating parent directories as needed.
    pub fn save_to(path: impl AsRef<Path>, config: &ClientConfig) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(config)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthtrack_core::config::DEFAULT_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigService::load_from(temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn file_settings_are_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://track.example.com/api\"\ntimeout_secs = 10\n",
        )
        .unwrap();

        let config = ConfigService::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "https://track.example.com/api");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api = \"not a table\"").unwrap();

        assert!(ConfigService::load_from(&path).is_err());
    }

    #[test]
    fn save_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let mut config = ClientConfig::default();
        config.api.timeout_secs = 7;
        ConfigService::save_to(&path, &config).unwrap();

        let loaded = ConfigService::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
