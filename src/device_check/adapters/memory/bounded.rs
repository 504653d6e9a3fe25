//! Capacity-bounded session-key registry.

use crate::device_check::{domain::SessionKey, ports::SessionKeyRegistry};
use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Session-key registry that forgets its oldest reservation once `capacity`
/// keys are held.
///
/// Uniqueness is therefore only guaranteed within the most recent
/// `capacity` reservations. Use [`super::InMemorySessionKeyRegistry`] when
/// keys must stay unique for the whole process lifetime.
#[derive(Debug)]
pub struct BoundedSessionKeyRegistry {
    capacity: NonZeroUsize,
    state: Mutex<BoundedState>,
}

#[derive(Debug, Default)]
struct BoundedState {
    keys: HashSet<SessionKey>,
    order: VecDeque<SessionKey>,
}

impl BoundedSessionKeyRegistry {
    /// Creates an empty registry holding at most `capacity` keys.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            state: Mutex::new(BoundedState::default()),
        }
    }

    /// Returns the maximum number of keys retained.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    // No operation leaves `keys` and `order` out of step, so poisoning is
    // recovered.
    fn lock(&self) -> MutexGuard<'_, BoundedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionKeyRegistry for BoundedSessionKeyRegistry {
    fn try_reserve(&self, key: &SessionKey) -> bool {
        let mut state = self.lock();
        if state.keys.contains(key) {
            return false;
        }

        if state.order.len() >= self.capacity.get()
            && let Some(evicted) = state.order.pop_front()
        {
            state.keys.remove(&evicted);
        }

        state.keys.insert(key.clone());
        state.order.push_back(key.clone());
        true
    }

    fn len(&self) -> usize {
        self.lock().order.len()
    }
}
