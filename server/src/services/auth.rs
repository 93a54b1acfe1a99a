//! Mock auth service: request validation, registration minting, login lookup.
//!
//! Every function here is synchronous and deterministic given its inputs;
//! route handlers only translate results into HTTP responses.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use models::validation::{MIN_PASSWORD_CHARS, MIN_USERNAME_CHARS, is_valid_email, shorter_than};
use models::{AuthResponse, CredentialHint, Field, FieldErrors, LoginRequest, Profile, RegisterRequest, User, messages};
use time::OffsetDateTime;

use super::accounts::{AccountTable, EXISTING_EMAIL};
use crate::state::{epoch_millis, iso_millis};

const DEFAULT_AVATAR: &str = "https://example.com/default-avatar.jpg";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid fields: {:?}", .0.fields())]
    Validation(FieldErrors),
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid credentials for {}", .0.attempted_email)]
    InvalidCredentials(CredentialHint),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Shape rules for `POST /auth/register`. Returns one message per violated
/// field; empty when the request is well formed.
#[must_use]
pub fn validate_registration(req: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if shorter_than(&req.username, MIN_USERNAME_CHARS) {
        errors.insert(Field::Username, messages::USERNAME_TOO_SHORT);
    }
    if !is_valid_email(&req.email) {
        errors.insert(Field::Email, messages::EMAIL_INVALID);
    }
    if shorter_than(&req.password, MIN_PASSWORD_CHARS) {
        errors.insert(Field::Password, messages::PASSWORD_TOO_SHORT);
    }
    if req.password != req.confirm_password {
        errors.insert(Field::ConfirmPassword, messages::PASSWORD_MISMATCH);
    }

    errors
}

/// Presence rules for `POST /auth/login`.
#[must_use]
pub fn validate_login(req: &LoginRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if req.email.is_empty() {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    }
    if req.password.is_empty() {
        errors.insert(Field::Password, messages::PASSWORD_REQUIRED);
    }

    errors
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Validate a registration and mint a fresh user and token from `now`.
///
/// Ids and tokens are derived from the epoch-millisecond clock, so two
/// registrations in the same millisecond receive the same values.
///
/// # Errors
///
/// `Validation` on malformed input, `EmailTaken` for the reserved address,
/// `Timestamp` if `now` cannot be rendered.
pub fn register(req: &RegisterRequest, now: OffsetDateTime) -> Result<AuthResponse, AuthError> {
    let errors = validate_registration(req);
    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    if req.email == EXISTING_EMAIL {
        return Err(AuthError::EmailTaken);
    }

    let millis = epoch_millis(now);
    let user = User {
        id: format!("mock-user-{millis}"),
        username: req.username.clone(),
        email: req.email.clone(),
        created_at: iso_millis(now)?,
        profile: Some(Profile {
            first_name: req.username.clone(),
            last_name: "User".to_owned(),
            avatar: DEFAULT_AVATAR.to_owned(),
        }),
    };

    Ok(AuthResponse { user, token: format!("mock-jwt-token-{millis}") })
}

/// Validate a login and look the pair up in the account table.
///
/// # Errors
///
/// `Validation` when a field is missing, `InvalidCredentials` (carrying every
/// test account as a hint) when no account matches.
pub fn login(accounts: &AccountTable, req: &LoginRequest) -> Result<AuthResponse, AuthError> {
    let errors = validate_login(req);
    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    let Some(account) = accounts.find(&req.email, &req.password) else {
        return Err(AuthError::InvalidCredentials(CredentialHint {
            attempted_email: req.email.clone(),
            error_type: messages::AUTHENTICATION_FAILED.to_owned(),
            suggestion: messages::CREDENTIALS_SUGGESTION.to_owned(),
            test_accounts: accounts.hints(),
        }));
    };

    Ok(AuthResponse { user: account.user.clone(), token: account.token.clone() })
}
