//! Medical reading use cases.

use std::sync::Arc;

use healthtrack_core::api::{ApiClient, MedicalRecordClient};
use healthtrack_core::care::{MedicalRecord, NewMedicalReading};
use healthtrack_core::error::{HealthTrackError, Result};
use healthtrack_core::session::{Session, SessionManager};

/// Health-tracking readings: patients record and review their own history;
/// doctors review the history of patients under their care.
pub struct MedicalRecordService {
    session: Arc<SessionManager>,
    client: MedicalRecordClient,
}

impl MedicalRecordService {
    pub fn new(session: Arc<SessionManager>, api: Arc<ApiClient>) -> Self {
        Self {
            session,
            client: MedicalRecordClient::new(api),
        }
    }

    /// The authenticated user's reading history.
    pub async fn history(&self) -> Result<Vec<MedicalRecord>> {
        let session = self.require_session().await?;
        self.client
            .list_for_user(&session.token, session.user.user_id)
            .await
    }

    /// A patient's reading history, as seen from the doctor dashboard.
    pub async fn history_for_patient(&self, patient_id: i64) -> Result<Vec<MedicalRecord>> {
        let session = self.require_session().await?;
        self.client.list_for_user(&session.token, patient_id).await
    }

    /// Fetches one record.
    pub async fn get(&self, record_id: i64) -> Result<MedicalRecord> {
        let session = self.require_session().await?;
        self.client.get(&session.token, record_id).await
    }

    /// Submits a new set of readings for the authenticated user.
    pub async fn record(&self, reading: &NewMedicalReading) -> Result<MedicalRecord> {
        let session = self.require_session().await?;
        self.client
            .record(&session.token, session.user.user_id, reading)
            .await
    }

    async fn require_session(&self) -> Result<Session> {
        self.session
            .current_session()
            .await
            .ok_or(HealthTrackError::NotAuthenticated)
    }
}
