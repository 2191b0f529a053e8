//! Medical record endpoints.

use std::sync::Arc;

use super::client::ApiClient;
use crate::care::{MedicalRecord, NewMedicalReading};
use crate::error::Result;

/// Client for `/medical-records/*`.
#[derive(Clone)]
pub struct MedicalRecordClient {
    api: Arc<ApiClient>,
}

impl MedicalRecordClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Reading history for the given user, newest first as the backend
    /// returns it.
    pub async fn list_for_user(&self, token: &str, user_id: i64) -> Result<Vec<MedicalRecord>> {
        let body = self
            .api
            .get_authed(&format!("medical-records/user/{user_id}"), token)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches one record.
    pub async fn get(&self, token: &str, record_id: i64) -> Result<MedicalRecord> {
        let body = self
            .api
            .get_authed(&format!("medical-records/{record_id}"), token)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Submits a new set of readings for the given user.
    pub async fn record(
        &self,
        token: &str,
        user_id: i64,
        reading: &NewMedicalReading,
    ) -> Result<MedicalRecord> {
        let body = self
            .api
            .put_authed(&format!("medical-records/user/{user_id}"), token, reading)
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}
