//! Device check validation implementation.
//!
//! This module provides the individual activity-data rules and the default
//! validator that combines them with session-key reservation.

pub mod rules;
pub mod service;

pub use rules::{ActivityKeyTracker, validate_value_type};
pub use service::DefaultDeviceCheckValidator;
