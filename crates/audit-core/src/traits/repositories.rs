//! Repository traits (ports) - define the interface for audit persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The host passes the implementation in at
//! construction time; there is no ambient container lookup.

use async_trait::async_trait;

use crate::entities::{AuditRecord, NewAuditRecord};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Persistence port for the audit log.
///
/// Insert-only: records are never updated or deleted through this
/// workspace. `fetch_all` exists for administrative review, not the event
/// path.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Insert one audit record
    async fn insert(&self, record: &NewAuditRecord) -> RepoResult<()>;

    /// Fetch every record, unfiltered and unpaginated
    async fn fetch_all(&self) -> RepoResult<Vec<AuditRecord>>;
}
