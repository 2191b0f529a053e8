//! Medication use cases.

use std::sync::Arc;

use healthtrack_core::api::{ApiClient, MedicationClient};
use healthtrack_core::care::{Medication, NewMedication};
use healthtrack_core::error::{HealthTrackError, Result};
use healthtrack_core::session::{Session, SessionManager};

/// Medication plan operations for both roles: patients list their own
/// plan; doctors manage the plans of patients under their care.
pub struct MedicationService {
    session: Arc<SessionManager>,
    client: MedicationClient,
}

impl MedicationService {
    pub fn new(session: Arc<SessionManager>, api: Arc<ApiClient>) -> Self {
        Self {
            session,
            client: MedicationClient::new(api),
        }
    }

    /// The authenticated user's own medication plan.
    pub async fn list_mine(&self) -> Result<Vec<Medication>> {
        let session = self.require_session().await?;
        self.client
            .list_for_user(&session.token, session.user.user_id)
            .await
    }

    /// A patient's medication plan, as seen from the doctor dashboard.
    pub async fn list_for_patient(&self, patient_id: i64) -> Result<Vec<Medication>> {
        let session = self.require_session().await?;
        self.client.list_for_user(&session.token, patient_id).await
    }

    /// Prescribes a medication to a patient.
    pub async fn add_for_patient(
        &self,
        patient_id: i64,
        medication: &NewMedication,
    ) -> Result<Medication> {
        let session = self.require_session().await?;
        self.client
            .add(&session.token, patient_id, medication)
            .await
    }

    /// Replaces a medication's details.
    pub async fn update(&self, medication_id: i64, medication: &NewMedication) -> Result<Medication> {
        let session = self.require_session().await?;
        self.client
            .update(&session.token, medication_id, medication)
            .await
    }

    /// Removes a medication from its plan.
    pub async fn remove(&self, medication_id: i64) -> Result<()> {
        let session = self.require_session().await?;
        self.client.delete(&session.token, medication_id).await
    }

    async fn require_session(&self) -> Result<Session> {
        self.session
            .current_session()
            .await
            .ok_or(HealthTrackError::NotAuthenticated)
    }
}
