//! Input validation utilities for registration data.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HealthTrackError, Result};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Validate display name
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(HealthTrackError::validation("Name is required"));
    }

    if name.len() > 100 {
        return Err(HealthTrackError::validation(
            "Name must be at most 100 characters long",
        ));
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(HealthTrackError::validation("Email is required"));
    }

    if email.len() > 254 {
        return Err(HealthTrackError::validation(
            "Email must be at most 254 characters long",
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(HealthTrackError::validation("Invalid email format"));
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(HealthTrackError::validation("Password is required"));
    }

    if password.len() > 128 {
        return Err(HealthTrackError::validation(
            "Password must be at most 128 characters long",
        ));
    }

    Ok(())
}
