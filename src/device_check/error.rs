//! Error types for device check validation.
//!
//! Session-key collisions stop a batch at the first offending record, while
//! activity-data failures are gathered across the whole batch and reported
//! together through [`DeviceCheckError::ActivityData`].

use super::domain::SessionKey;
use thiserror::Error;

/// Reasons a textual activity value does not match its declared type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The value is not a base-10 signed 64-bit integer.
    #[error("invalid integer value '{value}': {reason}")]
    Integer {
        /// The rejected value.
        value: String,
        /// Parser description of the failure.
        reason: String,
    },

    /// The value is not a 64-bit floating point number.
    #[error("invalid float value '{value}': {reason}")]
    Float {
        /// The rejected value.
        value: String,
        /// Parser description of the failure.
        reason: String,
    },

    /// The value is not `true` or `false`.
    #[error("invalid bool value '{0}'")]
    Bool(String),

    /// The declared type name is not supported.
    #[error("data type {0} invalid")]
    UnsupportedType(String),
}

/// A single activity-data failure detected within a batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDataIssue {
    /// The key already appeared earlier in the same batch.
    #[error("KvpKey {key} is not unique")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// The value does not parse as its declared type.
    #[error("KvpKey {key} {cause}")]
    InvalidValue {
        /// Key of the offending pair.
        key: String,
        /// Type-parse failure.
        cause: ValueTypeError,
    },
}

impl ActivityDataIssue {
    /// Returns the key the issue refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::DuplicateKey { key } | Self::InvalidValue { key, .. } => key,
        }
    }
}

/// Errors returned when a device check batch is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceCheckError {
    /// The batch contained no records.
    #[error("invalid or missing input")]
    MissingInput,

    /// A non-empty session key was already reserved.
    #[error("checkSessionKey should be unique")]
    DuplicateSessionKey(SessionKey),

    /// One or more activity-data checks failed, in detection order.
    #[error("activity data validation: {}", format_issues(.0))]
    ActivityData(Vec<ActivityDataIssue>),
}

fn format_issues(issues: &[ActivityDataIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DeviceCheckError {
    /// Returns `true` when the failure is caused by the request shape rather
    /// than by a business rule.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput)
    }

    /// Returns the individual activity-data issues, if any.
    #[must_use]
    pub fn issues(&self) -> Option<&[ActivityDataIssue]> {
        match self {
            Self::ActivityData(issues) => Some(issues),
            _ => None,
        }
    }
}
