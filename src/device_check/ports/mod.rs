//! Port contracts for device check validation.

mod session_key_registry;
mod validator;

pub use session_key_registry::SessionKeyRegistry;
pub use validator::{DeviceCheckValidator, ValidationResult};
