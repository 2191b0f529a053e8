//! Canonical normalization of authentication responses.
//!
//! The backend's success payload is flat JSON whose field names vary by
//! provider version (`jwt` vs `token` vs `accessToken`, `userId` vs `id`).
//! Normalization happens once, here, at the API boundary, and both the
//! login and signup paths use it; downstream code only ever sees the
//! strongly-shaped [`Session`].

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{HealthTrackError, Result};
use crate::session::Session;
use crate::user::{Role, Specialization, UserProfile};

/// Maps a successful authentication response body onto a [`Session`].
///
/// `fallback_email` is the address the caller submitted; it is used when
/// the response omits the email field (older backend builds do).
///
/// # Errors
///
/// Returns a `Server` error when the body lacks a usable token, user id or
/// role: a malformed success body is a backend fault, not a parse panic.
pub fn normalize_auth_response(body: &Value, fallback_email: Option<&str>) -> Result<Session> {
    let token = ["jwt", "token", "accessToken"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            HealthTrackError::server("authentication response did not contain a token")
        })?;

    let user_id = body
        .get("userId")
        .or_else(|| body.get("id"))
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            HealthTrackError::server("authentication response did not contain a user id")
        })?;

    let role = body
        .get("role")
        .and_then(Value::as_str)
        .ok_or_else(|| HealthTrackError::server("authentication response did not contain a role"))?
        .parse::<Role>()
        .map_err(|_| {
            HealthTrackError::server(format!(
                "authentication response carried an unknown role: {:?}",
                body.get("role")
            ))
        })?;

    let name = body
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let email = body
        .get("email")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| fallback_email.map(str::to_string))
        .ok_or_else(|| {
            HealthTrackError::server("authentication response did not contain an email")
        })?;

    let birthday = body
        .get("birthday")
        .and_then(Value::as_str)
        .and_then(parse_birthday);

    let specialization = body
        .get("specialization")
        .and_then(|value| serde_json::from_value::<Specialization>(value.clone()).ok());

    let phone_number = body
        .get("phoneNumber")
        .or_else(|| body.get("phone"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Session::new(
        token,
        UserProfile {
            user_id,
            name,
            email,
            role,
            birthday,
            specialization,
            phone_number,
        },
    ))
}

/// The backend emits birthdays as full ISO datetimes; only the date part is
/// meaningful. Unparseable values degrade to `None` rather than failing the
/// whole login.
fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_doctor_login_response() {
        let body = json!({
            "jwt": "abc",
            "userId": 7,
            "name": "Dr. Smith",
            "role": "DOCTOR",
            "email": "doc@example.com",
            "specialization": { "id": 2, "name": "Cardiology" }
        });

        let session = normalize_auth_response(&body, Some("doc@example.com")).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.user_id, 7);
        assert_eq!(session.user.name, "Dr. Smith");
        assert_eq!(session.user.role, Role::Doctor);
        assert_eq!(session.user.email, "doc@example.com");
        assert_eq!(
            session.user.specialization,
            Some(Specialization {
                id: 2,
                name: "Cardiology".to_string()
            })
        );
        assert_eq!(session.user.birthday, None);
    }

    #[test]
    fn accepts_alternate_token_field_names() {
        for key in ["jwt", "token", "accessToken"] {
            let body = json!({
                key: "tok",
                "userId": 1,
                "role": "PATIENT",
                "email": "p@example.com"
            });
            let session = normalize_auth_response(&body, None).unwrap();
            assert_eq!(session.token, "tok");
        }
    }

    #[test]
    fn missing_token_is_a_server_error() {
        let body = json!({ "userId": 1, "role": "PATIENT", "email": "p@example.com" });
        let err = normalize_auth_response(&body, None).unwrap_err();
        assert!(err.is_server());
    }

    #[test]
    fn empty_token_is_a_server_error() {
        let body = json!({ "jwt": "", "userId": 1, "role": "PATIENT", "email": "p@example.com" });
        assert!(normalize_auth_response(&body, None).unwrap_err().is_server());
    }

    #[test]
    fn unknown_role_is_a_server_error() {
        let body = json!({ "jwt": "t", "userId": 1, "role": "ADMIN", "email": "p@example.com" });
        assert!(normalize_auth_response(&body, None).unwrap_err().is_server());
    }

    #[test]
    fn birthday_datetime_is_trimmed_to_date() {
        let body = json!({
            "jwt": "t",
            "userId": 3,
            "role": "PATIENT",
            "email": "p@example.com",
            "birthday": "2000-05-17T00:00:00"
        });
        let session = normalize_auth_response(&body, None).unwrap();
        assert_eq!(
            session.user.birthday,
            NaiveDate::from_ymd_opt(2000, 5, 17)
        );
    }

    #[test]
    fn unparseable_birthday_degrades_to_none() {
        let body = json!({
            "jwt": "t",
            "userId": 3,
            "role": "PATIENT",
            "email": "p@example.com",
            "birthday": "yesterday"
        });
        let session = normalize_auth_response(&body, None).unwrap();
        assert_eq!(session.user.birthday, None);
    }

    #[test]
    fn falls_back_to_submitted_email() {
        let body = json!({ "jwt": "t", "userId": 4, "role": "PATIENT" });
        let session = normalize_auth_response(&body, Some("sub@example.com")).unwrap();
        assert_eq!(session.user.email, "sub@example.com");
    }

    #[test]
    fn accepts_alternate_id_and_phone_field_names() {
        let body = json!({
            "token": "t",
            "id": 9,
            "role": "PATIENT",
            "email": "p@example.com",
            "phone": "555-0101"
        });
        let session = normalize_auth_response(&body, None).unwrap();
        assert_eq!(session.user.user_id, 9);
        assert_eq!(session.user.phone_number, Some("555-0101".to_string()));
    }
}
