//! HTTP server bootstrap for the device check service.
//!
//! Wires together configuration, the session-key registry, the validator and
//! the Axum router, then serves until a shutdown signal arrives.

use crate::config::ServerConfig;
use crate::device_check::{
    adapters::{
        http::{AppState, router},
        memory::{BoundedSessionKeyRegistry, InMemorySessionKeyRegistry},
    },
    ports::{DeviceCheckValidator, SessionKeyRegistry},
    validation::DefaultDeviceCheckValidator,
};
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialises the global tracing subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    // Ignore the error raised when a subscriber is already installed.
    let _already_installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init();
}

/// Builds the session-key registry selected by `config`.
#[must_use]
pub fn build_registry(config: &ServerConfig) -> Arc<dyn SessionKeyRegistry> {
    match config.session_key_capacity {
        Some(capacity) => {
            let registry = BoundedSessionKeyRegistry::new(capacity);
            info!(
                capacity = registry.capacity().get(),
                "using bounded session-key registry"
            );
            Arc::new(registry)
        }
        None => Arc::new(InMemorySessionKeyRegistry::new()),
    }
}

/// Builds the application router for `config`.
#[must_use]
pub fn build_app(config: &ServerConfig) -> Router {
    let validator: Arc<dyn DeviceCheckValidator> =
        Arc::new(DefaultDeviceCheckValidator::new(build_registry(config)));
    router(AppState::new(validator), config.max_body_bytes)
}

/// Starts the HTTP server and serves until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError`] when the listener cannot be bound or serving
/// fails.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let app = build_app(&config);

    info!(
        "Starting device check service v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.listen_addr
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("device check service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
