//! Device check service: batch validation of device check records.
//!
//! This crate validates batches of device check records submitted over HTTP.
//! A batch is accepted only when every non-empty session key is new to the
//! running process, every activity key is unique within the batch, and every
//! activity value parses as its declared type.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Trait interfaces for the session-key registry and validator
//! - **Adapters**: In-memory registries and the Axum HTTP boundary
//!
//! # Modules
//!
//! - [`device_check`]: Domain, ports, adapters, and validation
//! - [`config`]: Environment-driven server configuration
//! - [`server`]: Tracing setup, wiring, and the serve loop

pub mod config;
pub mod device_check;
pub mod server;
