//! REST API helpers for communicating with the mock auth service.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies are decoded into [`ClientError::Server`]. A well-formed
//! error envelope keeps its typed details; anything else still yields
//! `error.message` when present so callers can show it verbatim.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use models::{AuthResponse, ErrorEnvelope, HealthResponse, LoginRequest, LogoutResponse, RegisterRequest, User};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Path prefix of every auth endpoint.
pub const AUTH_PREFIX: &str = "/api/v1/auth";

/// Default server origin used by front ends.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Transport seam between the auth controller and the service.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ClientError>;
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ClientError>;
    async fn logout(&self) -> Result<LogoutResponse, ClientError>;
    async fn me(&self) -> Result<User, ClientError>;
    async fn health(&self) -> Result<HealthResponse, ClientError>;
}

/// `reqwest`-backed [`AuthApi`].
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    server_url: String,
}

impl HttpAuthApi {
    /// Client for the service at `server_url` (scheme + host + port).
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), server_url)
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, server_url: &str) -> Self {
        Self { http, server_url: server_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn auth_url(&self, path: &str) -> String {
        auth_endpoint(&self.server_url, path)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let url = self.auth_url("login");
        tracing::debug!(%url, email = %req.email, "posting login");
        read_json(self.http.post(&url).json(req).send().await?).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let url = self.auth_url("register");
        tracing::debug!(%url, email = %req.email, "posting registration");
        read_json(self.http.post(&url).json(req).send().await?).await
    }

    async fn logout(&self) -> Result<LogoutResponse, ClientError> {
        let url = self.auth_url("logout");
        read_json(self.http.post(&url).send().await?).await
    }

    async fn me(&self) -> Result<User, ClientError> {
        let url = self.auth_url("me");
        read_json(self.http.get(&url).send().await?).await
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.server_url);
        read_json(self.http.get(&url).send().await?).await
    }
}

fn auth_endpoint(server_url: &str, path: &str) -> String {
    format!("{server_url}{AUTH_PREFIX}/{path}")
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
        return Err(decode_failure(status.as_u16(), &body));
    }
    Ok(serde_json::from_slice(&body)?)
}

/// Turn a non-2xx body into [`ClientError::Server`].
pub(crate) fn decode_failure(status: u16, body: &[u8]) -> ClientError {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        let message = Some(envelope.error.message).filter(|m| !m.is_empty());
        return ClientError::Server { status, message, details: Some(envelope.error.details) };
    }

    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.pointer("/error/message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty());
    ClientError::Server { status, message, details: None }
}
