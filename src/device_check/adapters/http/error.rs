//! Error responses for the device check endpoint.

use super::models::DecodeError;
use crate::device_check::error::DeviceCheckError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category reported in the `code` field of an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request did not declare `application/json`.
    ContentType,
    /// The body could not be decoded, broke the schema, or held no records.
    MalformedInput,
    /// A session-key or activity-data rule was violated.
    BusinessRule,
}

impl ErrorCode {
    /// Returns the numeric code sent to clients.
    #[must_use]
    pub const fn numeric_code(self) -> u16 {
        match self {
            Self::ContentType => 1,
            Self::MalformedInput => 2,
            Self::BusinessRule => 3,
        }
    }
}

/// JSON body sent with every rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric failure category.
    pub code: u16,
    /// Human-readable description.
    pub message: String,
}

/// Errors surfaced by the device check endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not declare the JSON media type.
    #[error("Content-type should be application/json")]
    UnsupportedContentType,

    /// The body could not be read.
    #[error("{0}")]
    UnreadableBody(String),

    /// The body could not be decoded into a batch.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The batch was rejected by validation.
    #[error(transparent)]
    Validation(#[from] DeviceCheckError),
}

impl ApiError {
    /// Returns the failure category of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedContentType => ErrorCode::ContentType,
            Self::UnreadableBody(_) | Self::Decode(_) => ErrorCode::MalformedInput,
            Self::Validation(err) if err.is_missing_input() => ErrorCode::MalformedInput,
            Self::Validation(_) => ErrorCode::BusinessRule,
        }
    }

    /// Builds the JSON body describing this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().numeric_code(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.body())).into_response()
    }
}
