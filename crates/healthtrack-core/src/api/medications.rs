//! Medication endpoints.

use std::sync::Arc;

use super::client::ApiClient;
use crate::care::{Medication, NewMedication};
use crate::error::Result;

/// Client for `/medications/*`.
#[derive(Clone)]
pub struct MedicationClient {
    api: Arc<ApiClient>,
}

impl MedicationClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Medications prescribed to the given user.
    pub async fn list_for_user(&self, token: &str, user_id: i64) -> Result<Vec<Medication>> {
        let body = self
            .api
            .get_authed(&format!("medications/user/{user_id}"), token)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Adds a medication to the given user's plan.
    pub async fn add(
        &self,
        token: &str,
        user_id: i64,
        medication: &NewMedication,
    ) -> Result<Medication> {
        let body = self
            .api
            .post_authed(&format!("medications/user/{user_id}"), token, medication)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches a single medication.
    pub async fn get(&self, token: &str, medication_id: i64) -> Result<Medication> {
        let body = self
            .api
            .get_authed(&format!("medications/{medication_id}"), token)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Replaces a medication's details.
    pub async fn update(
        &self,
        token: &str,
        medication_id: i64,
        medication: &NewMedication,
    ) -> Result<Medication> {
        let body = self
            .api
            .put_authed(&format!("medications/{medication_id}"), token, medication)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Removes a medication from the plan.
    pub async fn delete(&self, token: &str, medication_id: i64) -> Result<()> {
        self.api
            .delete_authed(&format!("medications/{medication_id}"), token)
            .await
    }
}
