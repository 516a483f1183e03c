//! Repository implementations
//!
//! PostgreSQL implementation of the persistence port defined in audit-core.

mod audit_log;
mod error;

pub use audit_log::PgAuditLogRepository;
