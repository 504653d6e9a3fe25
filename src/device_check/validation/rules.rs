//! Individual validation rule implementations.
//!
//! Rules are pure functions over borrowed domain values. They report
//! failures through return values and never consult shared state.

use crate::device_check::{
    domain::{KeyValuePair, KvpType},
    error::{ActivityDataIssue, ValueTypeError},
};
use std::collections::HashSet;

/// Validates that `value` parses as `kvp_type`.
///
/// - [`KvpType::Integer`]: base-10 signed 64-bit integer
/// - [`KvpType::Float`]: 64-bit float in decimal or exponential notation;
///   literals that overflow the 64-bit range are rejected
/// - [`KvpType::Bool`]: `true` or `false`, ASCII case-insensitive
/// - [`KvpType::String`]: always valid
/// - [`KvpType::Unrecognized`]: always invalid
///
/// # Errors
///
/// Returns the [`ValueTypeError`] describing the parse failure.
///
/// # Examples
///
/// ```
/// use device_check_service::device_check::{
///     domain::KvpType, validation::validate_value_type,
/// };
///
/// assert!(validate_value_type("122365", &KvpType::Integer).is_ok());
/// assert!(validate_value_type("12.3326", &KvpType::Float).is_ok());
/// assert!(validate_value_type("123", &KvpType::Bool).is_err());
/// assert!(validate_value_type("anything", &KvpType::from("web")).is_err());
/// ```
pub fn validate_value_type(value: &str, kvp_type: &KvpType) -> Result<(), ValueTypeError> {
    match kvp_type {
        KvpType::Integer => value
            .parse::<i64>()
            .map(drop)
            .map_err(|err| ValueTypeError::Integer {
                value: value.to_owned(),
                reason: err.to_string(),
            }),
        KvpType::Float => match value.parse::<f64>() {
            Ok(parsed) if !parsed.is_infinite() || is_infinity_literal(value) => Ok(()),
            Ok(_) => Err(ValueTypeError::Float {
                value: value.to_owned(),
                reason: "value out of range".to_owned(),
            }),
            Err(err) => Err(ValueTypeError::Float {
                value: value.to_owned(),
                reason: err.to_string(),
            }),
        },
        KvpType::Bool => {
            if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
                Ok(())
            } else {
                Err(ValueTypeError::Bool(value.to_owned()))
            }
        }
        KvpType::String => Ok(()),
        KvpType::Unrecognized(name) => Err(ValueTypeError::UnsupportedType(name.clone())),
    }
}

// `parse::<f64>` saturates overflowing literals to infinity; only spelled-out
// infinities are accepted as such.
fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Tracks activity keys seen so far in one batch.
///
/// A tracker is created per batch and shared by all of its records, so a key
/// repeated in a later record is still detected.
#[derive(Debug, Default)]
pub struct ActivityKeyTracker {
    seen: HashSet<String>,
}

impl ActivityKeyTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as seen, returning `true` if it had been seen before.
    ///
    /// The key stays marked either way, so every later occurrence is also
    /// reported as a repeat.
    pub fn observe(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return true;
        }
        self.seen.insert(key.to_owned());
        false
    }

    /// Returns the number of distinct keys seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if no keys have been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Checks every pair in `activity_data`, appending failures to `issues`.
///
/// For each pair, in order, a repeated key is reported first and then the
/// value is checked against its declared type. Processing never stops early.
pub fn collect_activity_data_issues(
    activity_data: &[KeyValuePair],
    tracker: &mut ActivityKeyTracker,
    issues: &mut Vec<ActivityDataIssue>,
) {
    for pair in activity_data {
        if tracker.observe(pair.key()) {
            issues.push(ActivityDataIssue::DuplicateKey {
                key: pair.key().to_owned(),
            });
        }

        if let Err(cause) = validate_value_type(pair.value(), pair.kvp_type()) {
            issues.push(ActivityDataIssue::InvalidValue {
                key: pair.key().to_owned(),
                cause,
            });
        }
    }
}
