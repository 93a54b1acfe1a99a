//! Auth-request state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms read `loading` to disable their submit controls and render `error`,
//! `field_errors` and `failure` after an attempt. The controller is the only
//! writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError};

use models::{ErrorDetails, FieldErrors, Session};

/// Authentication state tracking the current session and request status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// A request to the service is in flight.
    pub loading: bool,
    /// Message for the last failed attempt, shown verbatim.
    pub error: Option<String>,
    /// Per-field messages from local validation.
    pub field_errors: FieldErrors,
    /// Structured details of the last server error, for remediation hints.
    pub failure: Option<ErrorDetails>,
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Cloneable handle to one [`AuthState`], observable while a request is
/// pending.
#[derive(Clone, Debug, Default)]
pub struct AuthSignal(Arc<Mutex<AuthState>>);

impl AuthSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> AuthState {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.0.lock().unwrap_or_else(PoisonError::into_inner));
    }
}

/// Sets `loading` for its lifetime; clears it on drop, including when the
/// request future is dropped early.
pub(crate) struct LoadingGuard {
    signal: AuthSignal,
}

impl LoadingGuard {
    pub(crate) fn start(signal: &AuthSignal) -> Self {
        signal.update(|s| {
            s.loading = true;
            s.error = None;
            s.failure = None;
        });
        Self { signal: signal.clone() }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.signal.update(|s| s.loading = false);
    }
}
