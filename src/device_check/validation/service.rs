//! Validation service implementation.
//!
//! Provides the default implementation of the [`DeviceCheckValidator`] port,
//! reserving session keys through an injected [`SessionKeyRegistry`] and
//! aggregating activity-data failures across the batch.

use crate::device_check::{
    domain::{Acknowledgement, DeviceCheckBatch},
    error::DeviceCheckError,
    ports::{DeviceCheckValidator, SessionKeyRegistry, ValidationResult},
    validation::rules::{ActivityKeyTracker, collect_activity_data_issues},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default device check validator.
///
/// Records are processed in order. A session-key collision ends validation
/// immediately; keys reserved by earlier records of the same batch stay
/// reserved. Activity-data failures are collected across all records and
/// returned together once the batch has been walked.
#[derive(Debug)]
pub struct DefaultDeviceCheckValidator<R>
where
    R: SessionKeyRegistry + ?Sized,
{
    registry: Arc<R>,
}

impl<R> Clone for DefaultDeviceCheckValidator<R>
where
    R: SessionKeyRegistry + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<R> DefaultDeviceCheckValidator<R>
where
    R: SessionKeyRegistry + ?Sized,
{
    /// Creates a validator backed by `registry`.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Returns the session-key registry.
    #[must_use]
    pub const fn registry(&self) -> &Arc<R> {
        &self.registry
    }
}

impl<R> DeviceCheckValidator for DefaultDeviceCheckValidator<R>
where
    R: SessionKeyRegistry + ?Sized,
{
    fn validate(&self, batch: &DeviceCheckBatch) -> ValidationResult<Acknowledgement> {
        if batch.is_empty() {
            return Err(DeviceCheckError::MissingInput);
        }

        let mut tracker = ActivityKeyTracker::new();
        let mut issues = Vec::new();

        for (index, record) in batch.records().iter().enumerate() {
            if let Some(session_key) = record.session_key()
                && !self.registry.try_reserve(session_key)
            {
                warn!(record = index, %session_key, "session key already reserved");
                return Err(DeviceCheckError::DuplicateSessionKey(session_key.clone()));
            }

            if record.activity_data().is_empty() {
                debug!(record = index, "activity data is empty");
                continue;
            }

            collect_activity_data_issues(record.activity_data(), &mut tracker, &mut issues);
        }

        if issues.is_empty() {
            debug!(records = batch.len(), keys = tracker.len(), "batch accepted");
            Ok(Acknowledgement::accepted())
        } else {
            warn!(failures = issues.len(), "activity data validation failed");
            Err(DeviceCheckError::ActivityData(issues))
        }
    }
}

// Note: Unit tests for DefaultDeviceCheckValidator are located in
// src/device_check/tests/validation_tests.rs.
