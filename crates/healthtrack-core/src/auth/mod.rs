//! Authentication payloads and response normalization.
//!
//! The backend's authentication endpoints return loosely-shaped JSON with
//! provider-specific field names. This module owns the request payloads,
//! the pre-flight validation of registration data, and the one canonical
//! normalizer that maps an authentication response onto the local
//! [`Session`](crate::session::Session) shape. Both login and registration
//! go through the same normalizer.

mod normalize;
mod request;
pub(crate) mod validation;

pub use normalize::normalize_auth_response;
pub use request::{LoginRequest, RegistrationData, SignupRequest};
