//! Error handling utilities for repositories

use audit_core::error::DomainError;
use sqlx::Error as SqlxError;

/// PostgreSQL SQLSTATE for "relation does not exist"
const UNDEFINED_TABLE: &str = "42P01";

/// Convert a SQLx error to a DomainError.
///
/// A missing audit table gets its own variant so the database sink can
/// swallow exactly that case; everything else is a generic database error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(UNDEFINED_TABLE) {
            return DomainError::TableMissing(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}
