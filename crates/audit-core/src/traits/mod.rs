//! Repository traits (ports)

mod repositories;

pub use repositories::{AuditLogRepository, RepoResult};
