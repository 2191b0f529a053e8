//! Error types for the HealthTrack client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire HealthTrack client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HealthTrackError {
    /// The backend rejected the credentials or the submitted account data.
    /// Carries the server's message verbatim.
    #[error("{0}")]
    InvalidCredentials(String),

    /// A required field was missing or malformed, detected before any
    /// network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend returned an unparseable or unexpected body, or failed
    /// without a structured message.
    #[error("Server error: {0}")]
    Server(String),

    /// The request could not be completed at the transport level.
    #[error("Network error: {0}")]
    Network(String),

    /// An operation that requires a session was invoked while logged out.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Local durable storage error (file system operations)
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HealthTrackError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidCredentials error carrying the server's message
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidCredentials error
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials(_))
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Server error
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a Storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Returns the human-readable payload of the error.
    ///
    /// For errors that wrap a backend message (`InvalidCredentials`,
    /// `Server`) this is the server's message verbatim, without any
    /// variant prefix.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidCredentials(message)
            | Self::Validation(message)
            | Self::Server(message)
            | Self::Network(message)
            | Self::Config(message)
            | Self::Internal(message) => message.clone(),
            Self::NotAuthenticated => "Not authenticated".to_string(),
            Self::Storage { message } => message.clone(),
            Self::Serialization { message, .. } => message.clone(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HealthTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HealthTrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HealthTrackError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for HealthTrackError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for HealthTrackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Server(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Conversion from anyhow::Error (transitional, used at wiring seams)
impl From<anyhow::Error> for HealthTrackError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, HealthTrackError>`.
pub type Result<T> = std::result::Result<T, HealthTrackError>;
