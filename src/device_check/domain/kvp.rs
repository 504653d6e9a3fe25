//! Typed key-value attributes carried in a record's activity data.

use std::fmt;

/// Declared type of an activity value.
///
/// Unknown wire values are kept as [`KvpType::Unrecognized`] so the validator
/// can report them alongside other activity-data failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KvpType {
    /// Base-10 signed 64-bit integer.
    Integer,
    /// 64-bit floating point number.
    Float,
    /// `true` or `false`.
    Bool,
    /// Unconstrained text.
    String,
    /// Any other declared type name.
    Unrecognized(String),
}

impl KvpType {
    /// Returns the wire literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Integer => "general.integer",
            Self::Float => "general.float",
            Self::Bool => "general.bool",
            Self::String => "general.string",
            Self::Unrecognized(value) => value,
        }
    }
}

impl From<&str> for KvpType {
    fn from(value: &str) -> Self {
        match value {
            "general.integer" => Self::Integer,
            "general.float" => Self::Float,
            "general.bool" => Self::Bool,
            "general.string" => Self::String,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl fmt::Display for KvpType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One typed attribute within a record's activity data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    key: String,
    value: String,
    kvp_type: KvpType,
}

impl KeyValuePair {
    /// Creates a key-value pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, kvp_type: KvpType) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kvp_type,
        }
    }

    /// Returns the attribute key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the textual value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn kvp_type(&self) -> &KvpType {
        &self.kvp_type
    }
}
