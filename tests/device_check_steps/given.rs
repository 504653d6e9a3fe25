//! Given steps for device check BDD scenarios.

use super::world::DeviceCheckWorld;
use rstest_bdd_macros::given;
use serde_json::json;

#[given("a fresh device check service")]
fn fresh_service(world: &mut DeviceCheckWorld) {
    *world = DeviceCheckWorld::new();
}

#[given(r#"a record with session key "{session_key}""#)]
fn record_with_session_key(world: &mut DeviceCheckWorld, session_key: String) {
    world.records.push(json!({
        "checkType": "DEVICE",
        "activityType": "SIGNUP",
        "checkSessionKey": session_key,
        "activityData": [],
    }));
}

#[given(r#"the last record has activity "{key}" with value "{value}" of type "{kvp_type}""#)]
fn last_record_has_activity(
    world: &mut DeviceCheckWorld,
    key: String,
    value: String,
    kvp_type: String,
) -> Result<(), eyre::Report> {
    let activity = world
        .records
        .last_mut()
        .and_then(|record| record.get_mut("activityData"))
        .and_then(|data| data.as_array_mut())
        .ok_or_else(|| eyre::eyre!("no queued record to attach activity data to"))?;
    activity.push(json!({
        "kvpKey": key,
        "kvpValue": value,
        "kvpType": kvp_type,
    }));
    Ok(())
}

#[given(r#"the request declares content type "{content_type}""#)]
fn request_declares_content_type(world: &mut DeviceCheckWorld, content_type: String) {
    world.content_type = content_type;
}
