//! Device check intake and validation.
//!
//! A device check request carries a batch of records, each naming the kind of
//! check, the activity being checked, an optional session key, and a list of
//! typed key-value attributes. This module validates such batches against the
//! business rules of the service:
//!
//! - a non-empty session key may be accepted only once per process lifetime
//! - activity keys must be unique across every record of one batch
//! - every activity value must parse as its declared type
//!
//! # Architecture
//!
//! - **Domain**: value types in [`domain`]
//! - **Ports**: the [`ports::SessionKeyRegistry`] and
//!   [`ports::DeviceCheckValidator`] contracts
//! - **Adapters**: in-memory registries in [`adapters::memory`] and the HTTP
//!   boundary in [`adapters::http`]
//! - **Validation**: rule functions and the default validator in
//!   [`validation`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use device_check_service::device_check::{
//!     adapters::memory::InMemorySessionKeyRegistry,
//!     domain::{
//!         ActivityType, CheckType, DeviceCheckBatch, DeviceCheckRecord, KeyValuePair, KvpType,
//!         SessionKey,
//!     },
//!     ports::DeviceCheckValidator,
//!     validation::DefaultDeviceCheckValidator,
//! };
//!
//! let validator = DefaultDeviceCheckValidator::new(Arc::new(InMemorySessionKeyRegistry::new()));
//! let record = DeviceCheckRecord::new(CheckType::Device, ActivityType::Signup)
//!     .with_session_key(SessionKey::new("S1").expect("non-empty key"))
//!     .with_activity_data(vec![KeyValuePair::new("ip", "1.2.3.4", KvpType::String)]);
//!
//! let ack = validator
//!     .validate(&DeviceCheckBatch::new(vec![record]))
//!     .expect("batch should be accepted");
//! assert!(ack.puppy());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
