//! Care-plan resources: medications, appointments and medical readings.

mod model;

pub use model::{
    Appointment, AppointmentParty, MedicalRecord, Medication, NewAppointment, NewMedicalReading,
    NewMedication,
};
