//! Unit tests for the device check module.
//!
//! Tests are organised by layer: domain values, individual rules, and the
//! default validator.
