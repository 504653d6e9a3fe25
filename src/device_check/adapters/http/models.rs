//! Wire models for the device check endpoint.
//!
//! Field names follow the published JSON schema (`checkType`,
//! `activityType`, `checkSessionKey`, `activityData`, `kvpKey`, `kvpValue`,
//! `kvpType`). Conversion into domain values enforces the schema-level
//! enumerations for check and activity types; activity value types are passed
//! through so the validator can report unknown names with the other
//! activity-data failures.

use crate::device_check::domain::{
    ActivityType, CheckType, DeviceCheckBatch, DeviceCheckRecord, DomainError, KeyValuePair,
    KvpType, SessionKey,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire representation of one device check record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCheckRecordDto {
    /// Check category literal.
    pub check_type: String,
    /// Activity literal, or a `_`-prefixed vendor value.
    pub activity_type: String,
    /// Optional session key; empty means absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_session_key: Option<String>,
    /// Optional activity data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_data: Option<Vec<KeyValuePairDto>>,
}

/// Wire representation of one activity-data entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePairDto {
    /// Attribute key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kvp_key: Option<String>,
    /// Textual value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kvp_value: Option<String>,
    /// Declared type, e.g. `general.integer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kvp_type: Option<String>,
}

/// A record violated the schema-level enumerations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record {index}: {cause}")]
pub struct SchemaError {
    /// Position of the offending record in the batch.
    pub index: usize,
    /// The violated constraint.
    pub cause: DomainError,
}

impl KeyValuePairDto {
    fn into_domain(self) -> KeyValuePair {
        let kvp_type = KvpType::from(self.kvp_type.as_deref().unwrap_or_default());
        KeyValuePair::new(
            self.kvp_key.unwrap_or_default(),
            self.kvp_value.unwrap_or_default(),
            kvp_type,
        )
    }
}

impl DeviceCheckRecordDto {
    /// Converts the wire record into a domain record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the check or activity type is not an
    /// allowed literal.
    pub fn into_domain(self) -> Result<DeviceCheckRecord, DomainError> {
        let check_type = CheckType::try_from(self.check_type.as_str())?;
        let activity_type = ActivityType::try_from(self.activity_type.as_str())?;
        let activity_data = self
            .activity_data
            .unwrap_or_default()
            .into_iter()
            .map(KeyValuePairDto::into_domain);

        Ok(DeviceCheckRecord::new(check_type, activity_type)
            .with_optional_session_key(SessionKey::from_wire(self.check_session_key))
            .with_activity_data(activity_data))
    }
}

/// Error raised while decoding a request body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON for the wire schema.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A record violated the schema-level enumerations.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Decodes a JSON request body into a batch.
///
/// A JSON `null` body decodes to an empty batch, which the validator then
/// rejects as missing input.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON or a shape mismatch and
/// [`DecodeError::Schema`] for unknown check or activity types.
pub fn decode_batch(body: &[u8]) -> Result<DeviceCheckBatch, DecodeError> {
    let records: Option<Vec<DeviceCheckRecordDto>> = serde_json::from_slice(body)?;
    let domain_records = records
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_domain()
                .map_err(|cause| SchemaError { index, cause })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DeviceCheckBatch::new(domain_records))
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, decode_batch};
    use crate::device_check::domain::{ActivityType, CheckType, DomainError, KvpType};
    use rstest::rstest;

    #[rstest]
    fn decodes_full_record() {
        let body = br#"[{
            "checkType": "DEVICE",
            "activityType": "SIGNUP",
            "checkSessionKey": "S1",
            "activityData": [
                {"kvpKey": "ip", "kvpValue": "1.2.3.4", "kvpType": "general.string"}
            ]
        }]"#;

        let batch = decode_batch(body).expect("body should decode");
        let record = batch.records().first().expect("one record");

        assert_eq!(record.check_type(), CheckType::Device);
        assert_eq!(record.activity_type(), &ActivityType::Signup);
        assert_eq!(record.session_key().map(|key| key.as_str()), Some("S1"));
        let pair = record.activity_data().first().expect("one pair");
        assert_eq!(pair.key(), "ip");
        assert_eq!(pair.kvp_type(), &KvpType::String);
    }

    #[rstest]
    fn empty_session_key_is_treated_as_absent() {
        let body = br#"[{"checkType": "DEVICE", "activityType": "LOGIN", "checkSessionKey": ""}]"#;

        let batch = decode_batch(body).expect("body should decode");

        let record = batch.records().first().expect("one record");
        assert!(record.session_key().is_none());
        assert!(record.activity_data().is_empty());
    }

    #[rstest]
    fn vendor_activity_type_is_accepted() {
        let body = br#"[{"checkType": "COMBO", "activityType": "_ACME_TRANSFER"}]"#;

        let batch = decode_batch(body).expect("body should decode");

        let record = batch.records().first().expect("one record");
        assert_eq!(
            record.activity_type(),
            &ActivityType::VendorDefined("_ACME_TRANSFER".to_owned())
        );
    }

    #[rstest]
    fn unknown_kvp_type_is_passed_through() {
        let body = br#"[{"checkType": "DEVICE", "activityType": "SIGNUP",
            "activityData": [{"kvpKey": "a", "kvpValue": "1", "kvpType": "web"}]}]"#;

        let batch = decode_batch(body).expect("body should decode");

        let record = batch.records().first().expect("one record");
        let pair = record.activity_data().first().expect("one pair");
        assert_eq!(pair.kvp_type(), &KvpType::Unrecognized("web".to_owned()));
    }

    #[rstest]
    #[case(b"[]".as_slice())]
    #[case(b"null".as_slice())]
    fn empty_or_null_body_decodes_to_empty_batch(#[case] body: &[u8]) {
        let batch = decode_batch(body).expect("body should decode");
        assert!(batch.is_empty());
    }

    #[rstest]
    #[case(b"{".as_slice())]
    #[case(br#"{"checkType": "DEVICE"}"#.as_slice())]
    #[case(br#"[{"activityType": "SIGNUP"}]"#.as_slice())]
    fn malformed_body_is_a_json_error(#[case] body: &[u8]) {
        assert!(matches!(decode_batch(body), Err(DecodeError::Json(_))));
    }

    #[rstest]
    fn unknown_check_type_reports_record_index() {
        let body = br#"[
            {"checkType": "DEVICE", "activityType": "SIGNUP"},
            {"checkType": "RETINA", "activityType": "SIGNUP"}
        ]"#;

        let Err(DecodeError::Schema(err)) = decode_batch(body) else {
            panic!("expected schema error");
        };

        assert_eq!(err.index, 1);
        assert_eq!(err.cause, DomainError::UnknownCheckType("RETINA".to_owned()));
        assert_eq!(err.to_string(), "record 1: invalid checkType 'RETINA'");
    }

    #[rstest]
    fn unknown_activity_type_is_rejected() {
        let body = br#"[{"checkType": "DEVICE", "activityType": "signup"}]"#;

        assert!(matches!(
            decode_batch(body),
            Err(DecodeError::Schema(err))
                if err.cause == DomainError::UnknownActivityType("signup".to_owned())
        ));
    }
}
