//! Registry port guarding session-key uniqueness.

use crate::device_check::domain::SessionKey;

/// Process-wide set of reserved session keys.
///
/// # Implementation Notes
///
/// Implementations must:
/// - perform the membership check and the insert as one atomic step, so two
///   concurrent callers racing on the same key never both succeed
/// - be safe to share across any number of threads without external locking
/// - never release a reservation unless they document an eviction policy
pub trait SessionKeyRegistry: Send + Sync {
    /// Reserves `key`.
    ///
    /// Returns `true` when the key was absent and is now reserved, or `false`
    /// when it was already reserved, in which case state is unchanged.
    fn try_reserve(&self, key: &SessionKey) -> bool;

    /// Returns the number of keys currently held.
    fn len(&self) -> usize;

    /// Returns `true` if no keys are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
