//! Runs the device check HTTP service.
//!
//! Usage:
//!
//! ```text
//! device_check_server
//! ```
//!
//! Configuration is read from the environment:
//!
//! - `DEVICE_CHECK_HOST` (default `0.0.0.0`)
//! - `DEVICE_CHECK_PORT` (default `8080`)
//! - `DEVICE_CHECK_MAX_BODY_BYTES` (default `1048576`)
//! - `DEVICE_CHECK_SESSION_KEY_CAPACITY` (unset keeps every session key)
//! - `RUST_LOG` for log filtering (default `info`)

use device_check_service::config::ServerConfig;
use device_check_service::server::{ServerError, init_tracing, run};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing();
    let config = ServerConfig::from_env()?;
    run(config).await
}
