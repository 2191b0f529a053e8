//! Specialization catalog endpoints.
//!
//! The catalog is public: the registration flow lists it before any
//! session exists.

use std::sync::Arc;

use super::client::ApiClient;
use crate::error::Result;
use crate::user::Specialization;

/// Client for `/specializations/*`.
#[derive(Clone)]
pub struct SpecializationClient {
    api: Arc<ApiClient>,
}

impl SpecializationClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// All specializations offered by the platform.
    pub async fn list(&self) -> Result<Vec<Specialization>> {
        let body = self.api.get("specializations").await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches one specialization.
    pub async fn get(&self, specialization_id: i64) -> Result<Specialization> {
        let body = self
            .api
            .get(&format!("specializations/{specialization_id}"))
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}
