//! When steps for device check BDD scenarios.

use super::world::{DeviceCheckWorld, Submission, run_async};
use crate::test_helpers::send;
use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::Value;

fn submit(world: &mut DeviceCheckWorld) -> Result<(), eyre::Report> {
    let body = Value::from(world.records.clone()).to_string();
    let (status, response) = run_async(send(
        &world.app,
        Method::POST,
        "/isgood",
        Some(world.content_type.as_str()),
        body,
    ))?;
    world.last_submission = Some(Submission {
        status,
        body: response,
    });
    Ok(())
}

#[when("the batch is submitted")]
fn batch_submitted(world: &mut DeviceCheckWorld) -> Result<(), eyre::Report> {
    submit(world)
}

#[when("the batch is submitted again")]
fn batch_submitted_again(world: &mut DeviceCheckWorld) -> Result<(), eyre::Report> {
    let first = world.submission()?;
    if !first.status.is_success() {
        return Err(eyre::eyre!(
            "expected first submission to succeed, got {}",
            first.body
        ));
    }
    submit(world)
}
