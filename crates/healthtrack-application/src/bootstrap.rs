//! Client wiring.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use healthtrack_core::api::{ApiClient, AuthClient};
use healthtrack_core::config::ClientConfig;
use healthtrack_core::session::{SessionManager, SessionRepository};
use healthtrack_infrastructure::{ConfigService, FileSessionStore};

use crate::{
    AppointmentService, DirectoryService, MedicalRecordService, MedicationService, ProfileService,
};

/// Fully wired client: the session manager plus one service per dashboard
/// section. Construct once at startup and share.
pub struct HealthTrackClient {
    pub session: Arc<SessionManager>,
    pub profile: ProfileService,
    pub medications: MedicationService,
    pub appointments: AppointmentService,
    pub medical_records: MedicalRecordService,
    pub directory: DirectoryService,
}

impl HealthTrackClient {
    /// Wires the client from the default config file and session store
    /// under `~/.healthtrack`.
    pub fn from_default_location() -> Result<Self> {
        let config = ConfigService::load().context("Failed to load client configuration")?;
        let store =
            FileSessionStore::default_location().context("Failed to open the session store")?;
        Self::new(&config, Arc::new(store))
    }

    /// Wires the client over explicit configuration and session storage.
    pub fn new(config: &ClientConfig, repository: Arc<dyn SessionRepository>) -> Result<Self> {
        info!(base_url = %config.api.base_url, "Wiring HealthTrack client");

        let api = Arc::new(ApiClient::new(&config.api).context("Failed to build API client")?);
        let auth = Arc::new(AuthClient::new(api.clone()));
        let session = Arc::new(SessionManager::new(auth, repository));

        Ok(Self {
            profile: ProfileService::new(session.clone(), api.clone()),
            medications: MedicationService::new(session.clone(), api.clone()),
            appointments: AppointmentService::new(session.clone(), api.clone()),
            medical_records: MedicalRecordService::new(session.clone(), api.clone()),
            directory: DirectoryService::new(session.clone(), api),
            session,
        })
    }
}
