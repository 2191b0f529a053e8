//! Typed clients for the remote HealthTrack API.
//!
//! [`ApiClient`] owns the HTTP transport and the status-to-error mapping;
//! the per-resource clients layer the endpoint paths and wire shapes on
//! top of it. Authenticated calls take the bearer token explicitly; the
//! session manager is the only component that decides which token to use.

mod appointments;
mod auth;
mod client;
mod medical_records;
mod medications;
mod specializations;
mod users;

pub use appointments::AppointmentClient;
pub use auth::{AuthApi, AuthClient};
pub use client::ApiClient;
pub use medical_records::MedicalRecordClient;
pub use medications::MedicationClient;
pub use specializations::SpecializationClient;
pub use users::UserClient;
