//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the mock auth endpoints under `/api/v1/auth`, a root
//! health check, and a JSON 404 fallback under a single Axum router. CORS is
//! fully permissive because the browser client is served from another origin.

pub mod auth;

use std::any::Any;

use axum::Router;
use axum::extract::{OriginalUri, State};
use axum::http::Method;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use models::{HealthResponse, RouteMiss, messages};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::{AppState, iso_millis};

/// Path prefix of every auth endpoint.
pub const API_BASE: &str = "/api/v1/auth";

/// Full application router.
pub fn app(state: AppState) -> Router {
    with_layers(api_routes()).with_state(state)
}

fn api_routes() -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .method_not_allowed_fallback(not_found);

    Router::new()
        .nest(API_BASE, auth_routes)
        .route("/health", get(health))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Cross-cutting layers: CORS, request tracing, panic → 500 envelope.
fn with_layers(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let cause = err
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_owned());
    ApiError::Internal(cause).into_response()
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let timestamp = iso_millis(state.clock.now()).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(HealthResponse { status: "ok".to_owned(), timestamp, message: messages::SERVICE_RUNNING.to_owned() }))
}

async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(RouteMiss { path: uri.path().to_owned(), method: method.to_string() })
}

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;
