//! Device check records and the batch that carries them.

use super::{ActivityType, CheckType, KeyValuePair, SessionKey};

/// One unit of a device check batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCheckRecord {
    check_type: CheckType,
    activity_type: ActivityType,
    session_key: Option<SessionKey>,
    activity_data: Vec<KeyValuePair>,
}

impl DeviceCheckRecord {
    /// Creates a record with no session key and no activity data.
    #[must_use]
    pub const fn new(check_type: CheckType, activity_type: ActivityType) -> Self {
        Self {
            check_type,
            activity_type,
            session_key: None,
            activity_data: Vec::new(),
        }
    }

    /// Sets the session key.
    #[must_use]
    pub fn with_session_key(mut self, session_key: SessionKey) -> Self {
        self.session_key = Some(session_key);
        self
    }

    /// Sets an optional session key, leaving the record keyless on `None`.
    #[must_use]
    pub fn with_optional_session_key(mut self, session_key: Option<SessionKey>) -> Self {
        self.session_key = session_key;
        self
    }

    /// Replaces the activity data.
    #[must_use]
    pub fn with_activity_data(mut self, values: impl IntoIterator<Item = KeyValuePair>) -> Self {
        self.activity_data = values.into_iter().collect();
        self
    }

    /// Returns the check type.
    #[must_use]
    pub const fn check_type(&self) -> CheckType {
        self.check_type
    }

    /// Returns the activity type.
    #[must_use]
    pub const fn activity_type(&self) -> &ActivityType {
        &self.activity_type
    }

    /// Returns the session key, if one was supplied.
    #[must_use]
    pub const fn session_key(&self) -> Option<&SessionKey> {
        self.session_key.as_ref()
    }

    /// Returns the activity data in input order.
    #[must_use]
    pub fn activity_data(&self) -> &[KeyValuePair] {
        &self.activity_data
    }
}

/// Ordered sequence of records submitted in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceCheckBatch {
    records: Vec<DeviceCheckRecord>,
}

impl DeviceCheckBatch {
    /// Creates a batch from records in submission order.
    #[must_use]
    pub const fn new(records: Vec<DeviceCheckRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in submission order.
    #[must_use]
    pub fn records(&self) -> &[DeviceCheckRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the batch holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<DeviceCheckRecord>> for DeviceCheckBatch {
    fn from(records: Vec<DeviceCheckRecord>) -> Self {
        Self::new(records)
    }
}
