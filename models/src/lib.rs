//! Shared JSON contract for the mock auth service and its clients.
//!
//! This crate owns the wire representation used by both `server` and `client`:
//! user records, request/response bodies, the tagged error envelope, and the
//! user-facing messages both sides agree on. Field names are camelCase on the
//! wire.

pub mod error;
pub mod messages;
pub mod validation;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Deserializer, Serialize};

pub use error::{CredentialHint, ErrorBody, ErrorDetails, ErrorEnvelope, Field, FieldErrors, RouteMiss, TestAccountHint};

// =============================================================================
// USER
// =============================================================================

/// Display profile attached to a user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    /// Absolute avatar image URL.
    pub avatar: String,
}

/// A user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub created_at: String,
    /// Clients treat this as opaque display data; older payloads omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /auth/login`.
///
/// Absent or `null` fields decode as empty strings so they are reported by
/// field validation instead of failing body extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub confirm_password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Successful login/registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// `POST /auth/logout` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
    pub timestamp: String,
}

/// `GET /health` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub message: String,
}

// =============================================================================
// SESSION
// =============================================================================

/// Client-held proof of authentication: the bearer token plus the user it
/// was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}
