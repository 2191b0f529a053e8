//! Directory and catalog use cases.

use std::sync::Arc;

use healthtrack_core::api::{ApiClient, SpecializationClient, UserClient};
use healthtrack_core::error::{HealthTrackError, Result};
use healthtrack_core::session::SessionManager;
use healthtrack_core::user::{DoctorSummary, PatientSummary, Specialization};

/// Who-can-I-see listings, plus the public specialization catalog used by
/// the registration flow before any session exists.
pub struct DirectoryService {
    session: Arc<SessionManager>,
    users: UserClient,
    specializations: SpecializationClient,
}

impl DirectoryService {
    pub fn new(session: Arc<SessionManager>, api: Arc<ApiClient>) -> Self {
        Self {
            session,
            users: UserClient::new(api.clone()),
            specializations: SpecializationClient::new(api),
        }
    }

    /// Doctors available to the authenticated patient.
    pub async fn doctors(&self) -> Result<Vec<DoctorSummary>> {
        let token = self.require_token().await?;
        self.users.list_doctors(&token).await
    }

    /// Patients under the authenticated doctor's care.
    pub async fn patients(&self) -> Result<Vec<PatientSummary>> {
        let token = self.require_token().await?;
        self.users.list_patients(&token).await
    }

    /// The platform's specialization catalog. Public: needed while filling
    /// in a doctor registration, before any login.
    pub async fn specializations(&self) -> Result<Vec<Specialization>> {
        self.specializations.list().await
    }

    async fn require_token(&self) -> Result<String> {
        self.session
            .auth_token()
            .await
            .ok_or(HealthTrackError::NotAuthenticated)
    }
}
