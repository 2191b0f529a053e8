//! User domain model.

mod model;

pub use model::{
    DoctorSummary, PatientSummary, ProfileUpdate, Role, Specialization, UserProfile,
};
