//! HTTP boundary for device check requests.
//!
//! Accepts `POST /isgood` with a JSON array of device check records, checks
//! the declared content type, decodes the wire schema into domain values, and
//! hands the batch to a [`DeviceCheckValidator`](crate::device_check::ports::DeviceCheckValidator).
//! Every failure is answered with HTTP 400 and a `{"code", "message"}` body:
//!
//! | code | cause |
//! |------|-------|
//! | 1 | content type is not `application/json` |
//! | 2 | malformed JSON, schema violation, or empty batch |
//! | 3 | session-key or activity-data rule violation |

mod content_type;
mod error;
mod models;
mod routes;

pub use content_type::{JSON_MEDIA_TYPE, has_content_type};
pub use error::{ApiError, ErrorBody, ErrorCode};
pub use models::{DecodeError, DeviceCheckRecordDto, KeyValuePairDto, SchemaError, decode_batch};
pub use routes::{AppState, DEVICE_CHECK_PATH, HEALTH_PATH, router};
