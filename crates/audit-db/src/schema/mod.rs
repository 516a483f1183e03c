//! log_audit table schema
//!
//! One table, no version tracking: schema evolution is the host's
//! responsibility. The DDL is a const so hosts with their own migration
//! tooling can lift the statements instead of calling `ensure_schema`.

use sqlx::PgPool;

/// Name of the audit table
pub const LOG_AUDIT_TABLE: &str = "log_audit";

/// DDL for the audit table and its secondary indexes
pub const LOG_AUDIT_DDL: &str = r"
CREATE TABLE IF NOT EXISTS log_audit (
    id       BIGSERIAL PRIMARY KEY,
    event    VARCHAR(32)   NOT NULL,
    reason   INTEGER       NULL,
    datetime TIMESTAMPTZ   NOT NULL,
    username VARCHAR(64)   NULL,
    ip       VARCHAR(32)   NOT NULL,
    uri      VARCHAR(128)  NULL,
    message  VARCHAR(1024) NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_log_audit_event ON log_audit (event);
CREATE INDEX IF NOT EXISTS idx_log_audit_reason ON log_audit (reason);
CREATE INDEX IF NOT EXISTS idx_log_audit_username ON log_audit (username);
CREATE INDEX IF NOT EXISTS idx_log_audit_ip ON log_audit (ip);
CREATE INDEX IF NOT EXISTS idx_log_audit_uri ON log_audit (uri);
";

/// Create the audit table and indexes if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    // The prepared-statement protocol takes one statement per query
    for statement in statements() {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

fn statements() -> impl Iterator<Item = &'static str> {
    LOG_AUDIT_DDL
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
