//! Axum router and handlers for the device check endpoint.

use super::{
    content_type::{JSON_MEDIA_TYPE, has_content_type},
    error::ApiError,
    models::decode_batch,
};
use crate::device_check::{domain::Acknowledgement, ports::DeviceCheckValidator};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Request, State, rejection::BytesRejection},
    http::HeaderMap,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// Path of the device check endpoint.
pub const DEVICE_CHECK_PATH: &str = "/isgood";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    validator: Arc<dyn DeviceCheckValidator>,
}

impl AppState {
    /// Creates state around `validator`.
    #[must_use]
    pub fn new(validator: Arc<dyn DeviceCheckValidator>) -> Self {
        Self { validator }
    }
}

/// Builds the service router.
///
/// Request bodies larger than `max_body_bytes` are rejected as malformed
/// input.
#[must_use]
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(DEVICE_CHECK_PATH, post(device_check))
        .route(HEALTH_PATH, get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

async fn device_check(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let outcome = check_request(&state, &headers, body);
    match &outcome {
        Ok(_) => info!("device check accepted"),
        Err(err) => warn!(
            code = err.code().numeric_code(),
            error = %err,
            "device check rejected"
        ),
    }
    outcome.map(Json)
}

fn check_request(
    state: &AppState,
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Acknowledgement, ApiError> {
    if !has_content_type(headers, JSON_MEDIA_TYPE) {
        return Err(ApiError::UnsupportedContentType);
    }

    let bytes = body.map_err(|rejection| ApiError::UnreadableBody(rejection.body_text()))?;
    let batch = decode_batch(&bytes)?;
    Ok(state.validator.validate(&batch)?)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
