//! Use-case services for the HealthTrack client.
//!
//! Each service pairs the [`SessionManager`](healthtrack_core::session::SessionManager)
//! with one of the typed endpoint clients, resolving the bearer token and
//! the current user through the manager's accessors. UI layers talk to
//! these services; none of them reads the durable storage directly.

mod appointment_service;
mod bootstrap;
mod directory_service;
mod medical_record_service;
mod medication_service;
mod profile_service;

pub use appointment_service::AppointmentService;
pub use bootstrap::HealthTrackClient;
pub use directory_service::DirectoryService;
pub use medical_record_service::MedicalRecordService;
pub use medication_service::MedicationService;
pub use profile_service::ProfileService;
