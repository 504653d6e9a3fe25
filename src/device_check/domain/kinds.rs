//! Check and activity classification tags.

use super::DomainError;
use std::fmt;

/// Category of check requested for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckType {
    /// Device fingerprint check.
    Device,
    /// Biometric check.
    Biometric,
    /// Combined device and biometric check.
    Combo,
}

impl CheckType {
    /// Returns the wire literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Device => "DEVICE",
            Self::Biometric => "BIOMETRIC",
            Self::Combo => "COMBO",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CheckType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "DEVICE" => Ok(Self::Device),
            "BIOMETRIC" => Ok(Self::Biometric),
            "COMBO" => Ok(Self::Combo),
            _ => Err(DomainError::UnknownCheckType(value.to_owned())),
        }
    }
}

/// Activity being checked.
///
/// Values starting with `_` are accepted as [`ActivityType::VendorDefined`]
/// without being one of the recognised literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// Account sign-up.
    Signup,
    /// Account login.
    Login,
    /// Payment.
    Payment,
    /// Confirmation step.
    Confirmation,
    /// Vendor-specific activity, stored with its leading underscore.
    VendorDefined(String),
}

impl ActivityType {
    /// Prefix marking a vendor-defined activity type.
    pub const VENDOR_PREFIX: char = '_';

    /// Returns the wire literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Signup => "SIGNUP",
            Self::Login => "LOGIN",
            Self::Payment => "PAYMENT",
            Self::Confirmation => "CONFIRMATION",
            Self::VendorDefined(value) => value,
        }
    }

    /// Returns `true` for vendor-defined activity types.
    #[must_use]
    pub const fn is_vendor_defined(&self) -> bool {
        matches!(self, Self::VendorDefined(_))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActivityType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "SIGNUP" => Ok(Self::Signup),
            "LOGIN" => Ok(Self::Login),
            "PAYMENT" => Ok(Self::Payment),
            "CONFIRMATION" => Ok(Self::Confirmation),
            vendor if vendor.starts_with(Self::VENDOR_PREFIX) => {
                Ok(Self::VendorDefined(vendor.to_owned()))
            }
            _ => Err(DomainError::UnknownActivityType(value.to_owned())),
        }
    }
}
