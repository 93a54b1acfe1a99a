//! Drive a router in-process and decode its JSON reply.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::state::test_helpers::test_app_state;

/// Send one request through the full app backed by the fixed-clock state.
pub async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_to(super::app(test_app_state()), method, uri, body).await
}

/// Send a body that is not JSON at all.
pub async fn send_raw(method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_owned()))
        .unwrap();
    decode(super::app(test_app_state()).oneshot(req).await.unwrap()).await
}

pub async fn send_to(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    decode(app.oneshot(req).await.unwrap()).await
}

async fn decode(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}
