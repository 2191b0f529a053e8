//! Profile and directory endpoints.

use std::sync::Arc;

use super::client::ApiClient;
use crate::error::Result;
use crate::user::{DoctorSummary, PatientSummary, ProfileUpdate, UserProfile};

/// Client for `/users/*` and the role-specific directory endpoints.
#[derive(Clone)]
pub struct UserClient {
    api: Arc<ApiClient>,
}

impl UserClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetches the authenticated account's profile.
    pub async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        let body = self.api.get_authed("users/profile", token).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Applies a partial profile update and returns the stored profile.
    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        let body = self.api.put_authed("users/profile", token, update).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Doctors visible to a patient.
    pub async fn list_doctors(&self, token: &str) -> Result<Vec<DoctorSummary>> {
        let body = self.api.get_authed("patients/doctors", token).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Patients under a doctor's care.
    pub async fn list_patients(&self, token: &str) -> Result<Vec<PatientSummary>> {
        let body = self.api.get_authed("doctors/patients", token).await?;
        Ok(serde_json::from_value(body)?)
    }
}
