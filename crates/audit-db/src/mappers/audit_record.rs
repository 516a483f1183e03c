//! AuditRecordModel → AuditRecord conversion

use audit_core::entities::AuditRecord;
use audit_core::error::DomainError;
use audit_core::events::FailureReason;

use crate::models::AuditRecordModel;

impl TryFrom<AuditRecordModel> for AuditRecord {
    type Error = DomainError;

    /// Fallible because the reason column holds a raw code: a row written by
    /// a newer or corrupted source may carry a code outside the enumeration.
    fn try_from(model: AuditRecordModel) -> Result<Self, Self::Error> {
        let reason = model.reason.map(FailureReason::try_from).transpose()?;

        Ok(Self {
            id: model.id,
            event: model.event,
            reason,
            datetime: model.datetime,
            username: model.username,
            ip: model.ip,
            uri: model.uri,
            message: model.message,
        })
    }
}
