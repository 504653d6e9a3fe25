//! Server configuration loaded from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Environment variable naming the listen host.
pub const HOST_VAR: &str = "DEVICE_CHECK_HOST";
/// Environment variable naming the listen port.
pub const PORT_VAR: &str = "DEVICE_CHECK_PORT";
/// Environment variable capping request body size in bytes.
pub const MAX_BODY_BYTES_VAR: &str = "DEVICE_CHECK_MAX_BODY_BYTES";
/// Environment variable bounding the session-key registry.
pub const SESSION_KEY_CAPACITY_VAR: &str = "DEVICE_CHECK_SESSION_KEY_CAPACITY";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024; // 1 MiB

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure description.
        reason: String,
    },
}

/// Runtime configuration for the device check server.
///
/// # Examples
///
/// ```
/// use device_check_service::config::ServerConfig;
///
/// let config = ServerConfig::from_lookup(|name| match name {
///     "DEVICE_CHECK_PORT" => Some("9090".to_owned()),
///     _ => None,
/// })
/// .expect("valid configuration");
///
/// assert_eq!(config.listen_addr.port(), 9090);
/// assert!(config.session_key_capacity.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub listen_addr: SocketAddr,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Capacity of a bounded session-key registry; `None` keeps every key
    /// for the lifetime of the process.
    pub session_key_capacity: Option<NonZeroUsize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            session_key_capacity: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set but cannot
    /// be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_var(&lookup, HOST_VAR)?.unwrap_or_else(|| defaults.listen_addr.ip());
        let port = parse_var(&lookup, PORT_VAR)?.unwrap_or(DEFAULT_PORT);
        let max_body_bytes =
            parse_var(&lookup, MAX_BODY_BYTES_VAR)?.unwrap_or(defaults.max_body_bytes);
        let session_key_capacity = parse_var(&lookup, SESSION_KEY_CAPACITY_VAR)?;

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            max_body_bytes,
            session_key_capacity,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            name,
            value: raw.clone(),
            reason: err.to_string(),
        })
}
