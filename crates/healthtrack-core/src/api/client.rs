//! HTTP transport shared by all endpoint clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{HealthTrackError, Result};

/// Thin wrapper around `reqwest::Client` that knows the backend's base URL
/// and maps HTTP failures onto the client error taxonomy.
///
/// The transport applies the configured timeout and nothing else: no
/// retries, no backoff, no request cancellation.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| {
                HealthTrackError::internal(format!("Failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST without credentials (login, signup).
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// POST with a bearer token and no body (logout).
    pub async fn post_authed_empty(&self, path: &str, token: &str) -> Result<Value> {
        self.execute(self.http.post(self.url(path)).bearer_auth(token))
            .await
    }

    /// POST with a bearer token.
    pub async fn post_authed<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<Value> {
        self.execute(self.http.post(self.url(path)).bearer_auth(token).json(body))
            .await
    }

    /// GET with a bearer token.
    pub async fn get_authed(&self, path: &str, token: &str) -> Result<Value> {
        self.execute(self.http.get(self.url(path)).bearer_auth(token))
            .await
    }

    /// GET without credentials (public catalogs).
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(self.http.get(self.url(path))).await
    }

    /// PUT with a bearer token.
    pub async fn put_authed<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<Value> {
        self.execute(self.http.put(self.url(path)).bearer_auth(token).json(body))
            .await
    }

    /// DELETE with a bearer token; the response body is discarded.
    pub async fn delete_authed(&self, path: &str, token: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }

        Ok(())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Request rejected by backend");
            return Err(map_http_error(status, &body));
        }

        // The backend occasionally serves an HTML error page with a 200;
        // parse the text ourselves so that case surfaces as a Server error
        // instead of a decode panic.
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|_| HealthTrackError::server("response body was not valid JSON"))
    }
}

/// Maps a non-success response onto the error taxonomy.
///
/// A parseable JSON `{"message"}` body is the backend explaining a
/// rejection: surfaced verbatim, as `InvalidCredentials` for client errors
/// and `Server` for backend faults. Anything else (HTML error pages, empty
/// bodies) becomes a generic `Server` error carrying the status code.
fn map_http_error(status: StatusCode, body: &str) -> HealthTrackError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        });

    match message {
        Some(message) if status.is_client_error() => {
            HealthTrackError::invalid_credentials(message)
        }
        Some(message) => HealthTrackError::server(message),
        None => HealthTrackError::server(format!(
            "request failed with status {}",
            status.as_u16()
        )),
    }
}
