//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use audit_core::entities::{AuditRecord, NewAuditRecord};
use audit_core::traits::{AuditLogRepository, RepoResult};

use crate::models::AuditRecordModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, record), fields(event = %record.event))]
    async fn insert(&self, record: &NewAuditRecord) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO log_audit (event, reason, datetime, username, ip, uri, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&record.event)
        .bind(record.reason.map(|r| r.code()))
        .bind(record.datetime)
        .bind(&record.username)
        .bind(&record.ip)
        .bind(&record.uri)
        .bind(&record.message)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self) -> RepoResult<Vec<AuditRecord>> {
        let rows = sqlx::query_as::<_, AuditRecordModel>(
            r"
            SELECT id, event, reason, datetime, username, ip, uri, message
            FROM log_audit
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(AuditRecord::try_from).collect()
    }
}
