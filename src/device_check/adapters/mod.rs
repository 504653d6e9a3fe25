//! Adapter implementations for the device check ports.

pub mod http;
pub mod memory;
