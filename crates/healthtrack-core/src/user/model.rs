//! User, role and profile types shared across the client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Account role, fixed at registration time.
///
/// The role determines which dashboard and permissions apply and is treated
/// as immutable for the lifetime of a session; switching roles requires a
/// new login.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    Patient,
    Doctor,
}

/// A medical specialization as issued by the backend.
///
/// Carried on doctor profiles, and sent as a reference when registering a
/// doctor account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: i64,
    pub name: String,
}

/// Denormalized snapshot of the authenticated principal.
///
/// This is the canonical user record produced by response normalization and
/// persisted alongside the bearer token. Field names serialize in the
/// backend's camelCase convention so the durable copy matches the wire
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend-issued account identifier
    pub user_id: i64,
    /// Display name
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Birth date; present on patient accounts
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Specialization; present on doctor accounts
    #[serde(default)]
    pub specialization: Option<Specialization>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// A doctor as listed in the patient-facing directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub specialization_name: Option<String>,
}

/// A patient as listed in the doctor-facing directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// Partial profile update sent to `PUT /users/profile`.
///
/// Only the populated fields are transmitted; the backend leaves the rest
/// untouched. Profile edits do not flow back into the active session
/// snapshot (the session is replaced wholesale at the next login).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
}
