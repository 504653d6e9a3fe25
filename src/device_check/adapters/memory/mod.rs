//! In-memory session-key registries.

mod bounded;
mod session_keys;

pub use bounded::BoundedSessionKeyRegistry;
pub use session_keys::InMemorySessionKeyRegistry;
