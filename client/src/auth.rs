//! Auth controller: login, registration, logout and session restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends own one controller. It validates input, talks to the service
//! through an [`AuthApi`], persists the outcome through a [`SessionStore`],
//! and publishes progress on an [`AuthSignal`] that views can poll.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` return `bool`; the reason for a failure lives in
//! [`AuthState`](crate::state::auth::AuthState). Server messages are shown
//! verbatim. Transport and decode failures fall back to a fixed message.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use models::{AuthResponse, FieldErrors, LoginRequest, RegisterRequest, Session, messages};

use crate::error::ClientError;
use crate::net::api::AuthApi;
use crate::session::SessionStore;
use crate::state::auth::{AuthSignal, LoadingGuard};
use crate::validation;

pub struct AuthController<A, S> {
    api: A,
    store: S,
    state: AuthSignal,
}

impl<A: AuthApi, S: SessionStore> AuthController<A, S> {
    #[must_use]
    pub fn new(api: A, store: S) -> Self {
        Self { api, store, state: AuthSignal::new() }
    }

    /// Handle to the observable state. Clones share the same state.
    #[must_use]
    pub fn state(&self) -> AuthSignal {
        self.state.clone()
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.get().loading
    }

    /// Load any persisted session. Returns whether the user is authenticated.
    pub fn restore(&mut self) -> bool {
        let session = match self.store.get() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored session");
                None
            }
        };
        let authenticated = session.is_some();
        self.state.update(|s| s.session = session);
        authenticated
    }

    pub async fn login(&mut self, req: &LoginRequest) -> bool {
        if !self.accept(validation::validate_login(req)) {
            return false;
        }
        let _loading = LoadingGuard::start(&self.state);
        let result = self.api.login(req).await;
        self.finish(result, messages::LOGIN_FAILED)
    }

    pub async fn register(&mut self, req: &RegisterRequest) -> bool {
        if !self.accept(validation::validate_registration(req)) {
            return false;
        }
        let _loading = LoadingGuard::start(&self.state);
        let result = self.api.register(req).await;
        self.finish(result, messages::REGISTRATION_FAILED)
    }

    /// Drop the local session. The service is not contacted.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be cleared. The in-memory
    /// session is dropped either way.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.state.update(|s| {
            s.session = None;
            s.error = None;
            s.failure = None;
            s.field_errors = FieldErrors::new();
        });
        self.store.clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Record local validation errors. Returns whether the input may be sent.
    fn accept(&self, errors: FieldErrors) -> bool {
        let ok = errors.is_empty();
        self.state.update(|s| {
            if !ok {
                s.error = Some(messages::INPUT_HAS_ERRORS.to_owned());
                s.failure = None;
            }
            s.field_errors = errors;
        });
        ok
    }

    fn finish(&self, result: Result<AuthResponse, ClientError>, fallback: &str) -> bool {
        match result {
            Ok(resp) => {
                let session = Session::from(resp);
                if let Err(e) = self.store.set(&session) {
                    tracing::warn!(error = %e, "failed to persist session");
                }
                tracing::info!(user = %session.user.username, "authenticated");
                self.state.update(|s| s.session = Some(session));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "auth request failed");
                let message = e.user_message(fallback);
                let failure = e.details().cloned();
                self.state.update(|s| {
                    s.error = Some(message);
                    s.failure = failure;
                });
                false
            }
        }
    }
}
