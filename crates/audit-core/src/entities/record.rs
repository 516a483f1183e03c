//! Audit record entity - one row of the log_audit table

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::events::{AccessEvent, FailureReason};

/// One audit log row as read back from storage.
///
/// Records are immutable once written: no update or delete path exists
/// anywhere in this workspace. Retention is an operator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub id: i64,
    pub event: String,
    pub reason: Option<FailureReason>,
    pub datetime: DateTime<Utc>,
    pub username: Option<String>,
    pub ip: String,
    pub uri: Option<String>,
    pub message: String,
}

/// Insert payload for a new audit record; `id` is assigned by the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditRecord {
    pub event: String,
    pub reason: Option<FailureReason>,
    pub datetime: DateTime<Utc>,
    pub username: Option<String>,
    pub ip: String,
    pub uri: Option<String>,
    pub message: String,
}

impl NewAuditRecord {
    /// Build the record for an event, with the already-formatted message body
    pub fn from_event(event: &AccessEvent, message: impl Into<String>) -> Self {
        Self {
            event: event.kind.name().to_string(),
            reason: event.reason,
            datetime: event.timestamp,
            username: event.username.clone(),
            ip: event.ip.clone(),
            uri: event.uri.clone(),
            message: message.into(),
        }
    }
}
