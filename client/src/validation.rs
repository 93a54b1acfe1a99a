//! Client-side form validation.
//!
//! Runs before any request is sent. Rules are stricter than the service's
//! about presence: blank fields get a "required" message rather than a
//! format message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use models::validation::{MIN_PASSWORD_CHARS, MIN_USERNAME_CHARS, is_valid_email, shorter_than};
use models::{Field, FieldErrors, LoginRequest, RegisterRequest, messages};

/// Presence checks for the login form.
#[must_use]
pub fn validate_login(req: &LoginRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if req.email.trim().is_empty() {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    }
    if req.password.is_empty() {
        errors.insert(Field::Password, messages::PASSWORD_REQUIRED);
    }

    errors
}

/// Presence and format checks for the registration form; at most one
/// message per field.
#[must_use]
pub fn validate_registration(req: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if req.username.trim().is_empty() {
        errors.insert(Field::Username, messages::USERNAME_REQUIRED);
    } else if shorter_than(&req.username, MIN_USERNAME_CHARS) {
        errors.insert(Field::Username, messages::USERNAME_TOO_SHORT);
    }

    if req.email.trim().is_empty() {
        errors.insert(Field::Email, messages::EMAIL_REQUIRED);
    } else if !is_valid_email(&req.email) {
        errors.insert(Field::Email, messages::EMAIL_INVALID);
    }

    if req.password.is_empty() {
        errors.insert(Field::Password, messages::PASSWORD_REQUIRED);
    } else if shorter_than(&req.password, MIN_PASSWORD_CHARS) {
        errors.insert(Field::Password, messages::PASSWORD_TOO_SHORT);
    }

    if req.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, messages::CONFIRM_PASSWORD_REQUIRED);
    } else if req.password != req.confirm_password {
        errors.insert(Field::ConfirmPassword, messages::PASSWORD_MISMATCH);
    }

    errors
}
