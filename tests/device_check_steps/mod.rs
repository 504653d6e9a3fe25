//! Step definitions for device check behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
