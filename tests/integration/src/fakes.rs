//! In-memory doubles for the persistence port and the syslog writer

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use audit_core::entities::{AuditRecord, NewAuditRecord};
use audit_core::error::DomainError;
use audit_core::traits::{AuditLogRepository, RepoResult};
use audit_service::SyslogWrite;

/// Vec-backed audit repository; ids are assigned in insertion order
#[derive(Default)]
pub struct MemoryAuditLogRepository {
    records: Mutex<Vec<AuditRecord>>,
    table_missing: AtomicBool,
}

impl MemoryAuditLogRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make subsequent inserts fail as if the table had never been created
    pub fn set_table_missing(&self, missing: bool) {
        self.table_missing.store(missing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditLogRepository for MemoryAuditLogRepository {
    async fn insert(&self, record: &NewAuditRecord) -> RepoResult<()> {
        if self.table_missing.load(Ordering::SeqCst) {
            return Err(DomainError::TableMissing(
                "relation \"log_audit\" does not exist".to_string(),
            ));
        }

        let mut records = self.records.lock().unwrap();
        let id = records.len() as i64 + 1;
        records.push(AuditRecord {
            id,
            event: record.event.clone(),
            reason: record.reason,
            datetime: record.datetime,
            username: record.username.clone(),
            ip: record.ip.clone(),
            uri: record.uri.clone(),
            message: record.message.clone(),
        });
        Ok(())
    }

    async fn fetch_all(&self) -> RepoResult<Vec<AuditRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Syslog writer that collects lines instead of talking to a daemon
#[derive(Default)]
pub struct MemorySyslog {
    lines: Mutex<Vec<String>>,
}

impl MemorySyslog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SyslogWrite for MemorySyslog {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// SyslogWrite passthrough so tests can keep an Arc handle on the collector
pub struct SharedSyslog(pub Arc<MemorySyslog>);

impl SyslogWrite for SharedSyslog {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.0.write_line(line)
    }
}
