//! Shared helpers for router-level tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use taskboard::http::router;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{TaskService, default_tasks},
};
use tower::ServiceExt;

/// Service type shared by the router fixtures.
pub type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh, empty task service.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Router over an empty store.
#[fixture]
pub fn app(service: TestService) -> Router {
    router(service)
}

/// Router over a store holding the demo tasks.
///
/// # Errors
///
/// Returns an error if seeding fails.
pub async fn seeded_app() -> Result<Router, eyre::Report> {
    let svc = service();
    svc.seed(default_tasks()).await?;
    Ok(router(svc))
}

/// Sends one request and returns the status with the decoded JSON body.
///
/// # Errors
///
/// Returns an error if the request cannot be built, the router fails, or
/// the body is not JSON.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value), eyre::Report> {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())?,
    };
    send_request(app, request).await
}

/// Sends a prepared request and returns the status with the decoded JSON
/// body.
///
/// # Errors
///
/// Returns an error if the router fails or the body is not JSON.
pub async fn send_request(
    app: &Router,
    request: Request<Body>,
) -> Result<(StatusCode, Value), eyre::Report> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}

/// A complete creation payload.
#[must_use]
pub fn write_spec() -> Value {
    serde_json::json!({
        "title": "Write spec",
        "description": "draft",
        "priority": "High",
        "dueDate": "2030-01-01"
    })
}
