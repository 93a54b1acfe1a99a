//! Login and registration form models.
//!
//! Each form owns its field values and per-field errors. Submitting runs the
//! client rules first and only reaches the controller when they pass.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use models::{Field, FieldErrors, LoginRequest, RegisterRequest};

use crate::auth::AuthController;
use crate::net::api::AuthApi;
use crate::session::SessionStore;
use crate::validation;

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    errors: FieldErrors,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value and clear its error. Fields the form does not
    /// have are ignored.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Username | Field::ConfirmPassword => return,
        };
        *slot = value.into();
        self.errors.remove(field);
    }

    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }

    /// Validate and, when clean, log in. Refused while a request is in flight.
    pub async fn submit<A: AuthApi, S: SessionStore>(&mut self, auth: &mut AuthController<A, S>) -> bool {
        if auth.is_loading() {
            return false;
        }
        let req = self.request();
        self.errors = validation::validate_login(&req);
        if !self.errors.is_empty() {
            return false;
        }
        auth.login(&req).await
    }
}

// =============================================================================
// REGISTER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    errors: FieldErrors,
}

impl RegisterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
        self.errors.remove(field);
    }

    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    /// Validate and, when clean, register. Refused while a request is in flight.
    pub async fn submit<A: AuthApi, S: SessionStore>(&mut self, auth: &mut AuthController<A, S>) -> bool {
        if auth.is_loading() {
            return false;
        }
        let req = self.request();
        self.errors = validation::validate_registration(&req);
        if !self.errors.is_empty() {
            return false;
        }
        auth.register(&req).await
    }
}
