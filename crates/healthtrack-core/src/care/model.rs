//! Wire models for the care-plan endpoints.
//!
//! Field names follow the backend's JSON conventions: camelCase for bean
//! properties, with the appointment date kept under its literal
//! `appointment_date` key.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A prescribed medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub next_reminder_time: Option<NaiveDateTime>,
}

/// Payload for creating or updating a medication.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_reminder_time: Option<NaiveDateTime>,
}

/// One party of an appointment (the backend embeds full user entities;
/// only the identifying fields are read back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentParty {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A booked appointment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub doctor: Option<AppointmentParty>,
    pub appointment_date: NaiveDateTime,
    #[serde(default)]
    pub reason: String,
    /// Set by the doctor when accepting or declining the request
    #[serde(default)]
    pub accepted: bool,
}

/// Booking request: the doctor to see, when, and why.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub doctor_id: i64,
    pub appointment_date: NaiveDateTime,
    pub reason: String,
}

/// One set of medical readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: i64,
    pub recorded_at: NaiveDateTime,
    #[serde(default)]
    pub blood_sugar: Option<f64>,
    #[serde(default)]
    pub systolic_blood_pressure: Option<i32>,
    #[serde(default)]
    pub diastolic_blood_pressure: Option<i32>,
    #[serde(default)]
    pub heart_rate: Option<i32>,
}

/// Readings submitted from a tracking form.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicalReading {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic_blood_pressure: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic_blood_pressure: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn appointment_deserializes_from_backend_shape() {
        let body = json!({
            "id": 12,
            "user": { "id": 3, "name": "Pat", "email": "p@example.com" },
            "doctor": { "id": 7, "name": "Dr. Smith", "email": "d@example.com" },
            "appointment_date": "2025-03-10T14:30:00",
            "reason": "Checkup",
            "accepted": true
        });

        let appointment: Appointment = serde_json::from_value(body).unwrap();
        assert_eq!(appointment.id, 12);
        assert_eq!(appointment.doctor.as_ref().unwrap().id, 7);
        assert_eq!(appointment.reason, "Checkup");
        assert!(appointment.accepted);
    }

    #[test]
    fn medication_tolerates_missing_reminder() {
        let body = json!({ "id": 1, "name": "Metformin", "dosage": "500mg" });
        let medication: Medication = serde_json::from_value(body).unwrap();
        assert_eq!(medication.next_reminder_time, None);
    }

    #[test]
    fn reading_serializes_only_present_fields() {
        let reading = NewMedicalReading {
            heart_rate: Some(72),
            ..Default::default()
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["heartRate"], 72);
        assert!(json.get("bloodSugar").is_none());
    }
}
