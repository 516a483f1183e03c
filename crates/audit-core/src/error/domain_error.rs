//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// An event source handed over a reason code outside the fixed
    /// enumeration. This is a programming defect, not a user-facing error,
    /// and nothing in this workspace catches it.
    #[error("Unknown failure reason code: {0}")]
    UnknownFailureReason(i32),

    /// The audit table has not been created yet
    #[error("Audit table missing: {0}")]
    TableMissing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for log output
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownFailureReason(_) => "UNKNOWN_FAILURE_REASON",
            Self::TableMissing(_) => "TABLE_MISSING",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error means the audit table does not exist
    pub fn is_table_missing(&self) -> bool {
        matches!(self, Self::TableMissing(_))
    }
}
