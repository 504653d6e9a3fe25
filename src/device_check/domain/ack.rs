//! Success acknowledgement returned for an accepted batch.

use serde::{Deserialize, Serialize};

/// Acknowledgement that a batch passed every validation rule.
///
/// Serialises as `{"puppy": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    puppy: bool,
}

impl Acknowledgement {
    /// Creates the acknowledgement for an accepted batch.
    #[must_use]
    pub const fn accepted() -> Self {
        Self { puppy: true }
    }

    /// Returns the acknowledgement flag.
    #[must_use]
    pub const fn puppy(self) -> bool {
        self.puppy
    }
}
