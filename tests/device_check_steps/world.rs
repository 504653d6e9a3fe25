//! Shared world state for device check BDD scenarios.

use axum::Router;
use axum::http::StatusCode;
use rstest::fixture;
use serde_json::Value;

use crate::test_helpers::fresh_app;

/// Outcome of the last submission.
pub struct Submission {
    /// HTTP status returned by the service.
    pub status: StatusCode,
    /// Decoded JSON body.
    pub body: Value,
}

/// Scenario world for device check behaviour tests.
pub struct DeviceCheckWorld {
    /// Application under test.
    pub app: Router,
    /// Records queued for the next submission.
    pub records: Vec<Value>,
    /// Declared request content type.
    pub content_type: String,
    /// Result of the most recent submission.
    pub last_submission: Option<Submission>,
}

impl DeviceCheckWorld {
    /// Creates a world with a fresh application and no queued records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: fresh_app(),
            records: Vec::new(),
            content_type: "application/json".to_owned(),
            last_submission: None,
        }
    }

    /// Returns the last submission or an error when nothing was sent.
    pub fn submission(&self) -> Result<&Submission, eyre::Report> {
        self.last_submission
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no submission recorded in scenario world"))
    }
}

impl Default for DeviceCheckWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DeviceCheckWorld {
    DeviceCheckWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
