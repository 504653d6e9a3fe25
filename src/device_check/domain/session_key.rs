//! Client-supplied session key.

use super::DomainError;
use std::fmt;

/// Opaque, non-empty session key supplied with a device check record.
///
/// An empty key on the wire means "no key supplied"; it never becomes a
/// `SessionKey` and is therefore never checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Creates a session key.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptySessionKey`] when `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(DomainError::EmptySessionKey);
        }
        Ok(Self(raw))
    }

    /// Converts an optional wire value, treating the empty string as absent.
    #[must_use]
    pub fn from_wire(value: Option<String>) -> Option<Self> {
        value.filter(|raw| !raw.is_empty()).map(Self)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
