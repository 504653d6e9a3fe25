//! Unbounded in-memory session-key registry.

use crate::device_check::{domain::SessionKey, ports::SessionKeyRegistry};
use dashmap::DashSet;

/// Thread-safe registry holding every accepted session key for the lifetime
/// of the process.
///
/// Backed by a sharded [`DashSet`], so concurrent reservations on different
/// keys rarely contend and a reservation on the same key is decided by a
/// single insert. Keys are never evicted.
///
/// # Example
///
/// ```
/// use device_check_service::device_check::{
///     adapters::memory::InMemorySessionKeyRegistry, domain::SessionKey,
///     ports::SessionKeyRegistry,
/// };
///
/// let registry = InMemorySessionKeyRegistry::new();
/// let key = SessionKey::new("S1").expect("non-empty key");
/// assert!(registry.try_reserve(&key));
/// assert!(!registry.try_reserve(&key));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySessionKeyRegistry {
    keys: DashSet<SessionKey>,
}

impl InMemorySessionKeyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `key` has been reserved.
    #[must_use]
    pub fn contains(&self, key: &SessionKey) -> bool {
        self.keys.contains(key)
    }
}

impl SessionKeyRegistry for InMemorySessionKeyRegistry {
    fn try_reserve(&self, key: &SessionKey) -> bool {
        self.keys.insert(key.clone())
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}
