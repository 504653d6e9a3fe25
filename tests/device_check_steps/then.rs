//! Then steps for device check BDD scenarios.

use super::world::DeviceCheckWorld;
use axum::http::StatusCode;
use rstest_bdd_macros::then;
use serde_json::json;

#[then("the batch is acknowledged")]
fn batch_acknowledged(world: &DeviceCheckWorld) -> Result<(), eyre::Report> {
    let submission = world.submission()?;
    if submission.status != StatusCode::OK || submission.body != json!({"puppy": true}) {
        return Err(eyre::eyre!(
            "expected acknowledgement, got {} {}",
            submission.status,
            submission.body
        ));
    }
    Ok(())
}

#[then("the request fails with code {code:u64}")]
fn request_fails_with_code(world: &DeviceCheckWorld, code: u64) -> Result<(), eyre::Report> {
    let submission = world.submission()?;
    if submission.status != StatusCode::BAD_REQUEST {
        return Err(eyre::eyre!("expected 400, got {}", submission.status));
    }
    let actual = submission.body.get("code").and_then(serde_json::Value::as_u64);
    if actual != Some(code) {
        return Err(eyre::eyre!("expected code {code}, got {}", submission.body));
    }
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message_is(world: &DeviceCheckWorld, message: String) -> Result<(), eyre::Report> {
    let actual = error_message(world)?;
    if actual != message {
        return Err(eyre::eyre!("expected message '{message}', got '{actual}'"));
    }
    Ok(())
}

#[then(r#"the error message mentions "{fragment}""#)]
fn error_message_mentions(world: &DeviceCheckWorld, fragment: String) -> Result<(), eyre::Report> {
    let actual = error_message(world)?;
    if !actual.contains(&fragment) {
        return Err(eyre::eyre!("expected '{actual}' to mention '{fragment}'"));
    }
    Ok(())
}

fn error_message(world: &DeviceCheckWorld) -> Result<String, eyre::Report> {
    world
        .submission()?
        .body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| eyre::eyre!("response carries no error message"))
}
