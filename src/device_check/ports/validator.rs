//! Validator port for device check batches.

use crate::device_check::{
    domain::{Acknowledgement, DeviceCheckBatch},
    error::DeviceCheckError,
};

/// Result type for device check validation.
pub type ValidationResult<T> = Result<T, DeviceCheckError>;

/// Port for validating a device check batch end to end.
///
/// # Implementation Notes
///
/// Implementations should:
/// - reject an empty batch before touching any shared state
/// - stop at the first session-key collision
/// - collect every activity-data failure before returning
/// - be safe to call concurrently
pub trait DeviceCheckValidator: Send + Sync {
    /// Validates `batch`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceCheckError::MissingInput`] for an empty batch,
    /// [`DeviceCheckError::DuplicateSessionKey`] on the first reused session
    /// key, or [`DeviceCheckError::ActivityData`] carrying every activity-data
    /// failure found.
    fn validate(&self, batch: &DeviceCheckBatch) -> ValidationResult<Acknowledgement>;
}
