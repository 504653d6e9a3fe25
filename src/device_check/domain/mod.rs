//! Domain model for device check batches.
//!
//! These types carry no transport or storage concerns; the HTTP adapter
//! converts its wire models into them before validation runs.

mod ack;
mod error;
mod kinds;
mod kvp;
mod record;
mod session_key;

pub use ack::Acknowledgement;
pub use error::DomainError;
pub use kinds::{ActivityType, CheckType};
pub use kvp::{KeyValuePair, KvpType};
pub use record::{DeviceCheckBatch, DeviceCheckRecord};
pub use session_key::SessionKey;
