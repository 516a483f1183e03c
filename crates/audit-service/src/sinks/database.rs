//! Database sink - persists audit records through the repository port

use std::sync::Arc;

use tracing::error;

use audit_core::entities::NewAuditRecord;
use audit_core::events::AccessEvent;
use audit_core::traits::AuditLogRepository;

use crate::context::{format_message, truncate_to_char_boundary};
use crate::error::ServiceResult;

/// Maximum length of the message column
const MESSAGE_LIMIT: usize = 1024;

/// Writes audit records to the log_audit table
#[derive(Clone)]
pub struct DatabaseSink {
    repo: Arc<dyn AuditLogRepository>,
}

impl DatabaseSink {
    /// Create a sink over the injected repository
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }

    /// Persist one event.
    ///
    /// A missing audit table is reported to the system log and swallowed:
    /// the audit write is best-effort and must never fail the request that
    /// triggered the event. Any other failure propagates.
    pub async fn record(&self, event: &AccessEvent) -> ServiceResult<()> {
        let message = format_message(event)?;
        let record =
            NewAuditRecord::from_event(event, truncate_to_char_boundary(&message, MESSAGE_LIMIT));

        match self.repo.insert(&record).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_table_missing() => {
                error!(event = event.kind.name(), error = %e, "audit logging failure");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
