//! Appointment use cases.

use std::sync::Arc;

use healthtrack_core::api::{ApiClient, AppointmentClient};
use healthtrack_core::care::{Appointment, NewAppointment};
use healthtrack_core::error::{HealthTrackError, Result};
use healthtrack_core::session::{Session, SessionManager};
use healthtrack_core::user::Role;

/// Appointment operations, role-aware: patients book and review their own
/// appointments; doctors review and respond to the requests addressed to
/// them.
pub struct AppointmentService {
    session: Arc<SessionManager>,
    client: AppointmentClient,
}

impl AppointmentService {
    pub fn new(session: Arc<SessionManager>, api: Arc<ApiClient>) -> Self {
        Self {
            session,
            client: AppointmentClient::new(api),
        }
    }

    /// Books an appointment for the authenticated patient.
    pub async fn book(&self, appointment: &NewAppointment) -> Result<Appointment> {
        let session = self.require_session().await?;
        self.client
            .book(&session.token, session.user.user_id, appointment)
            .await
    }

    /// The appointments relevant to the authenticated user: their own
    /// bookings for a patient, incoming requests for a doctor.
    pub async fn list_mine(&self) -> Result<Vec<Appointment>> {
        let session = self.require_session().await?;
        match session.user.role {
            Role::Patient => {
                self.client
                    .list_for_patient(&session.token, session.user.user_id)
                    .await
            }
            Role::Doctor => {
                self.client
                    .list_for_doctor(&session.token, session.user.user_id)
                    .await
            }
        }
    }

    /// Accepts or declines an appointment request as the authenticated
    /// doctor.
    pub async fn respond(&self, appointment_id: i64, accept: bool) -> Result<Appointment> {
        let session = self.require_session().await?;
        if session.user.role != Role::Doctor {
            return Err(HealthTrackError::validation(
                "Only doctors can respond to appointment requests",
            ));
        }
        self.client
            .set_status(&session.token, appointment_id, session.user.user_id, accept)
            .await
    }

    /// Cancels an appointment.
    pub async fn cancel(&self, appointment_id: i64) -> Result<()> {
        let session = self.require_session().await?;
        self.client.cancel(&session.token, appointment_id).await
    }

    async fn require_session(&self) -> Result<Session> {
        self.session
            .current_session()
            .await
            .ok_or(HealthTrackError::NotAuthenticated)
    }
}
