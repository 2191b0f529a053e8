//! Authentication request payloads.

use chrono::NaiveDate;
use serde::Serialize;

use super::validation;
use crate::error::{HealthTrackError, Result};
use crate::user::{Role, Specialization};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginRequest {
    /// Builds a login request, rejecting empty credentials before any
    /// network traffic.
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Result<Self> {
        let email = email.into();
        let password = password.into();
        if email.trim().is_empty() {
            return Err(HealthTrackError::validation("Email is required"));
        }
        if password.is_empty() {
            return Err(HealthTrackError::validation("Password is required"));
        }
        Ok(Self {
            email,
            password,
            role,
        })
    }
}

/// Body of `POST /auth/signup`, in the backend's wire shape.
///
/// Produced from [`RegistrationData`] after validation; not constructed
/// directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
}

/// Role-discriminated registration payload as collected from the user.
///
/// Common fields apply to both roles; `birthday` is required for
/// [`Role::Patient`] and `specialization` for [`Role::Doctor`]. Validation
/// runs locally, before the network call.
#[derive(Debug, Clone)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub role: Role,
    /// Required when registering a patient
    pub birthday: Option<NaiveDate>,
    /// Required when registering a doctor
    pub specialization: Option<Specialization>,
}

impl RegistrationData {
    /// Checks common and role-specific required fields.
    pub fn validate(&self) -> Result<()> {
        validation::validate_name(&self.name)?;
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)?;

        match self.role {
            Role::Patient if self.birthday.is_none() => Err(HealthTrackError::validation(
                "Birthday is required for patient registration",
            )),
            Role::Doctor if self.specialization.is_none() => Err(HealthTrackError::validation(
                "Specialization is required for doctor registration",
            )),
            _ => Ok(()),
        }
    }

    /// Validates and converts into the wire payload.
    pub fn into_request(self) -> Result<SignupRequest> {
        self.validate()?;

        // Only the field matching the role is transmitted, mirroring what
        // the registration form submits.
        let (birthday, specialization) = match self.role {
            Role::Patient => (self.birthday, None),
            Role::Doctor => (None, self.specialization),
        };

        Ok(SignupRequest {
            email: self.email,
            password: self.password,
            role: self.role,
            name: self.name,
            phone_number: self.phone_number,
            birthday,
            specialization,
        })
    }
}
