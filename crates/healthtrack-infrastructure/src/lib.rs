//! Infrastructure implementations for the HealthTrack client.
//!
//! Provides the durable pieces the core crate defines seams for: the
//! filesystem-backed session store, path resolution for the client's
//! dot-directory, and configuration loading.

pub mod config_service;
pub mod paths;
pub mod session_store;

pub use config_service::ConfigService;
pub use paths::HealthTrackPaths;
pub use session_store::FileSessionStore;
