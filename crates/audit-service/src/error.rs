//! Service-level errors

use thiserror::Error;

use audit_core::error::DomainError;

/// Errors surfaced to the dispatch caller
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Syslog write failed: {0}")]
    Syslog(#[from] std::io::Error),

    #[error("Failed to encode event context: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
