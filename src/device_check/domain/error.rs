//! Error types for constructing device check domain values.

use thiserror::Error;

/// Errors returned while constructing device check domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A session key was constructed from an empty string.
    #[error("session key must not be empty")]
    EmptySessionKey,

    /// The check type is not one of the recognised literals.
    #[error("invalid checkType '{0}'")]
    UnknownCheckType(String),

    /// The activity type is neither a recognised literal nor vendor-prefixed.
    #[error("invalid activityType '{0}'")]
    UnknownActivityType(String),
}
