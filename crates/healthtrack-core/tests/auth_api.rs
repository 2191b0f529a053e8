//! Integration tests driving `AuthClient` against a stub HTTP backend.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use healthtrack_core::api::{ApiClient, AuthApi, AuthClient};
use healthtrack_core::auth::{LoginRequest, RegistrationData};
use healthtrack_core::config::ApiConfig;
use healthtrack_core::user::{Role, Specialization};

async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> AuthClient {
    let config = ApiConfig {
        base_url: format!("http://{addr}/api"),
        timeout_secs: 5,
    };
    AuthClient::new(Arc::new(ApiClient::new(&config).unwrap()))
}

fn doctor_login() -> LoginRequest {
    LoginRequest::new("doc@example.com", "pw123", Role::Doctor).unwrap()
}

#[tokio::test]
async fn login_normalizes_a_well_formed_success_body() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            Json(json!({
                "message": "Login success",
                "jwt": "abc",
                "userId": 7,
                "name": "Dr. Smith",
                "role": "DOCTOR",
                "email": "doc@example.com",
                "specialization": { "id": 2, "name": "Cardiology" }
            }))
        }),
    );
    let client = client_for(spawn_stub(router).await);

    let session = client.login(&doctor_login()).await.unwrap();

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

#[tokio::test]
async fn login_reflects_the_submitted_role() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "jwt": "tok",
                "userId": 3,
                "name": "Pat",
                "role": body["role"],
                "email": body["email"]
            }))
        }),
    );
    let client = client_for(spawn_stub(router).await);

    let request = LoginRequest::new("pat@example.com", "pw", Role::Patient).unwrap();
    let session = client.login(&request).await.unwrap();

    assert_eq!(session.user.role, Role::Patient);
    assert_eq!(session.user.email, "pat@example.com");
}

#[tokio::test]
async fn rejected_login_surfaces_the_backend_message() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Bad credentials" })),
            )
        }),
    );
    let client = client_for(spawn_stub(router).await);

    let err = client.login(&doctor_login()).await.unwrap_err();

    assert!(err.is_invalid_credentials());
    assert_eq!(err.message(), "Bad credentials");
}

#[tokio::test]
async fn html_error_page_becomes_a_server_error() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<html><body><h1>Whitelabel Error Page</h1></body></html>"),
            )
        }),
    );
    let client = client_for(spawn_stub(router).await);

    let err = client.login(&doctor_login()).await.unwrap_err();
    assert!(err.is_server());
}

#[tokio::test]
async fn html_body_on_success_status_becomes_a_server_error() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async { Html("<html><body>maintenance</body></html>") }),
    );
    let client = client_for(spawn_stub(router).await);

    let err = client.login(&doctor_login()).await.unwrap_err();
    assert!(err.is_server());
}

#[tokio::test]
async fn unreachable_backend_becomes_a_network_error() {
    // Bind then drop, so the port is very likely unoccupied.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);

    let err = client.login(&doctor_login()).await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn signup_goes_through_the_same_normalization_as_login() {
    let router = Router::new().route(
        "/api/auth/signup",
        post(|Json(body): Json<Value>| async move {
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Signup success",
                    "jwt": "fresh-token",
                    "userId": 11,
                    "name": body["name"],
                    "role": body["role"],
                    "email": body["email"],
                    "birthday": "1990-04-01T00:00:00"
                })),
            )
        }),
    );
    let client = client_for(spawn_stub(router).await);

    let request = RegistrationData {
        name: "Pat Doe".to_string(),
        email: "pat@example.com".to_string(),
        password: "pw123".to_string(),
        phone_number: None,
        role: Role::Patient,
        birthday: chrono::NaiveDate::from_ymd_opt(1990, 4, 1),
        specialization: None,
    }
    .into_request()
    .unwrap();

    let session = client.signup(&request).await.unwrap();

    assert_eq!(session.token, "fresh-token");
    assert_eq!(session.user.user_id, 11);
    assert_eq!(session.user.role, Role::Patient);
    assert_eq!(
        session.user.birthday,
        chrono::NaiveDate::from_ymd_opt(1990, 4, 1)
    );
}

#[tokio::test]
async fn logout_sends_the_bearer_token() {
    let router = Router::new().route(
        "/api/auth/logout",
        post(|headers: axum::http::HeaderMap| async move {
            let authorization = headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if authorization == "Bearer abc" {
                (
                    StatusCode::OK,
                    Json(json!({ "message": "Logged out successfully" })),
                )
            } else {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Missing or invalid Authorization header" })),
                )
            }
        }),
    );
    let client = client_for(spawn_stub(router).await);

    client.logout("abc").await.unwrap();

    let err = client.logout("wrong").await.unwrap_err();
    assert_eq!(err.message(), "Missing or invalid Authorization header");
}
