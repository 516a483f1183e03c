//! Audit record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the log_audit table
#[derive(Debug, Clone, FromRow)]
pub struct AuditRecordModel {
    pub id: i64,
    pub event: String,
    /// Failure reason code; NULL when the event carried no reason
    pub reason: Option<i32>,
    pub datetime: DateTime<Utc>,
    pub username: Option<String>,
    pub ip: String,
    pub uri: Option<String>,
    pub message: String,
}
