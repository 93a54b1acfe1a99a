//! Auth routes: register, login, logout, current user.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use models::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest, User, messages};

use crate::error::ApiError;
use crate::services::{accounts, auth as auth_svc};
use crate::state::{AppState, iso_millis};

/// `POST /auth/register`: validate, then mint a user unless the email is reserved.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let req = body_or_empty(payload)?;
    match auth_svc::register(&req, state.clock.now()) {
        Ok(resp) => {
            tracing::info!(user_id = %resp.user.id, email = %resp.user.email, "registered mock user");
            Ok((StatusCode::CREATED, Json(resp)))
        }
        Err(e) => {
            tracing::warn!(email = %req.email, error = %e, "registration rejected");
            Err(e.into())
        }
    }
}

/// `POST /auth/login`: exact match against the fixed account table.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let req = body_or_empty(payload)?;
    match auth_svc::login(&state.accounts, &req) {
        Ok(resp) => {
            tracing::info!(user_id = %resp.user.id, email = %req.email, "login succeeded");
            Ok(Json(resp))
        }
        Err(e) => {
            tracing::warn!(email = %req.email, error = %e, "login rejected");
            Err(e.into())
        }
    }
}

/// `POST /auth/logout`: always succeeds; the mock keeps no sessions.
pub async fn logout(State(state): State<AppState>) -> Result<Json<LogoutResponse>, ApiError> {
    let timestamp = iso_millis(state.clock.now()).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(LogoutResponse { message: messages::LOGGED_OUT.to_owned(), timestamp }))
}

/// `GET /auth/me`: the fixed test user, regardless of caller.
pub async fn me() -> Json<User> {
    Json(accounts::current_user())
}

/// A body sent without a JSON content type is read as an empty object, so the
/// request fails field validation instead of body parsing.
fn body_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
