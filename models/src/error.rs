//! Error envelope shared by every failing endpoint.
//!
//! DESIGN
//! ======
//! Each error kind carries its own fixed detail shape, tagged on the wire by
//! `code`. A failing response always looks like:
//!
//! ```json
//! {"error": {"code": "VALIDATION_ERROR", "details": {"email": "..."}, "message": "..."}}
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A form field that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Wire name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Per-field validation messages, ordered by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the message for `field`, if any.
    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields that carry a message, in field order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// One entry of the test-account hint returned on a failed login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAccountHint {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Remediation details for `INVALID_CREDENTIALS`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialHint {
    pub attempted_email: String,
    pub error_type: String,
    pub suggestion: String,
    pub test_accounts: Vec<TestAccountHint>,
}

/// Route that matched nothing, for `NOT_FOUND`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMiss {
    pub path: String,
    pub method: String,
}

/// Error kind plus its fixed detail shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", content = "details", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorDetails {
    ValidationError(FieldErrors),
    UserAlreadyExists {},
    InvalidCredentials(CredentialHint),
    NotFound(RouteMiss),
    InternalServerError {},
}

impl ErrorDetails {
    /// Wire value of the `code` tag.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UserAlreadyExists {} => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InternalServerError {} => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Body of the `error` object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(flatten)]
    pub details: ErrorDetails,
    pub message: String,
}

/// Top-level JSON of every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn new(details: ErrorDetails, message: impl Into<String>) -> Self {
        Self { error: ErrorBody { details, message: message.into() } }
    }
}
