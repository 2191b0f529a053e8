//! Appointment endpoints.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::client::ApiClient;
use crate::care::{Appointment, NewAppointment};
use crate::error::Result;

/// Client for `/appointments/*`.
#[derive(Clone)]
pub struct AppointmentClient {
    api: Arc<ApiClient>,
}

// The backend expects the booked doctor as a nested entity reference.
#[derive(Serialize)]
struct AppointmentRequest<'a> {
    doctor: DoctorRef,
    appointment_date: NaiveDateTime,
    reason: &'a str,
}

#[derive(Serialize)]
struct DoctorRef {
    id: i64,
}

#[derive(Serialize)]
struct StatusRequest {
    accept: bool,
}

impl AppointmentClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Books an appointment on behalf of the given patient.
    pub async fn book(
        &self,
        token: &str,
        user_id: i64,
        appointment: &NewAppointment,
    ) -> Result<Appointment> {
        let request = AppointmentRequest {
            doctor: DoctorRef {
                id: appointment.doctor_id,
            },
            appointment_date: appointment.appointment_date,
            reason: &appointment.reason,
        };
        let body = self
            .api
            .post_authed(&format!("appointments/user/{user_id}"), token, &request)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Appointment history for a patient.
    pub async fn list_for_patient(&self, token: &str, user_id: i64) -> Result<Vec<Appointment>> {
        let body = self
            .api
            .get_authed(&format!("appointments/user/{user_id}"), token)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Appointment requests addressed to a doctor.
    pub async fn list_for_doctor(&self, token: &str, doctor_id: i64) -> Result<Vec<Appointment>> {
        let body = self
            .api
            .get_authed(&format!("appointments/doctor/{doctor_id}"), token)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Accepts or declines an appointment request as the given doctor.
    pub async fn set_status(
        &self,
        token: &str,
        appointment_id: i64,
        doctor_id: i64,
        accept: bool,
    ) -> Result<Appointment> {
        let body = self
            .api
            .put_authed(
                &format!("appointments/{appointment_id}/doctor/{doctor_id}/status"),
                token,
                &StatusRequest { accept },
            )
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Cancels an appointment.
    pub async fn cancel(&self, token: &str, appointment_id: i64) -> Result<()> {
        self.api
            .delete_authed(&format!("appointments/{appointment_id}"), token)
            .await
    }
}
