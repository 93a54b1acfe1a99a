//! HTTP error type shared by all handlers.
//!
//! Every failure is rendered as the tagged `models::ErrorEnvelope`; internal
//! causes are logged and replaced by a generic message on the wire.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models::{CredentialHint, ErrorDetails, ErrorEnvelope, FieldErrors, RouteMiss, messages};

use crate::services::auth::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {message}")]
    Validation { message: String, fields: FieldErrors },
    #[error("email already registered")]
    Conflict,
    #[error("invalid credentials")]
    Unauthorized(CredentialHint),
    #[error("no route for {} {}", .0.method, .0.path)]
    NotFound(RouteMiss),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire envelope for this error.
    #[must_use]
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Validation { message, fields } => {
                ErrorEnvelope::new(ErrorDetails::ValidationError(fields.clone()), message.clone())
            }
            Self::Conflict => ErrorEnvelope::new(ErrorDetails::UserAlreadyExists {}, messages::EMAIL_TAKEN),
            Self::Unauthorized(hint) => {
                ErrorEnvelope::new(ErrorDetails::InvalidCredentials(hint.clone()), messages::INVALID_CREDENTIALS)
            }
            Self::NotFound(miss) => ErrorEnvelope::new(ErrorDetails::NotFound(miss.clone()), messages::ENDPOINT_NOT_FOUND),
            Self::Internal(_) => ErrorEnvelope::new(ErrorDetails::InternalServerError {}, messages::INTERNAL_ERROR),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(fields) => Self::Validation { message: messages::INPUT_HAS_ERRORS.to_owned(), fields },
            AuthError::EmailTaken => Self::Conflict,
            AuthError::InvalidCredentials(hint) => Self::Unauthorized(hint),
            AuthError::Timestamp(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        let message = match rejection {
            JsonRejection::JsonDataError(_) => messages::MISTYPED_BODY,
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => messages::MALFORMED_BODY,
            _ => messages::UNREADABLE_BODY,
        };
        Self::Validation { message: message.to_owned(), fields: FieldErrors::new() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            tracing::error!(%cause, "internal error");
        }
        (self.status(), Json(self.envelope())).into_response()
    }
}
