//! Shared HTTP helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use device_check_service::config::ServerConfig;
use device_check_service::server::build_app;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Builds an application with its own empty session-key registry.
#[must_use]
pub fn fresh_app() -> Router {
    build_app(&ServerConfig::default())
}

/// Sends a request and returns the status with the decoded JSON body.
///
/// # Errors
///
/// Returns an error when the request cannot be built, the service fails, or
/// the body cannot be collected.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Result<(StatusCode, Value), eyre::Report> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(declared) = content_type {
        builder = builder.header(CONTENT_TYPE, declared);
    }

    let response = app.clone().oneshot(builder.body(body.into())?).await?;

    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, json))
}
