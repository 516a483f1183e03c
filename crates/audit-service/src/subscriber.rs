//! The audit subscriber - wires configuration flags to sink handlers

use std::sync::Arc;

use tracing::debug;

use audit_common::AuditConfig;
use audit_core::events::AccessEventKind;
use audit_core::traits::AuditLogRepository;

use crate::dispatcher::AccessControlDispatcher;
use crate::sinks::{DatabaseSink, SyslogSink, SyslogWrite};

/// Records access-control events to the targets enabled in configuration.
///
/// All collaborators are injected at construction; the subscriber performs
/// no lookup of its own.
pub struct AuditSubscriber {
    config: AuditConfig,
    database: DatabaseSink,
    syslog: Arc<SyslogSink>,
}

impl AuditSubscriber {
    /// Build a subscriber from its collaborators
    pub fn new(
        config: AuditConfig,
        repo: Arc<dyn AuditLogRepository>,
        writer: Box<dyn SyslogWrite>,
    ) -> Self {
        let ident = config.syslog.ident.clone();
        Self {
            config,
            database: DatabaseSink::new(repo),
            syslog: Arc::new(SyslogSink::new(writer, ident)),
        }
    }

    /// Register one handler per event kind enabled in configuration.
    ///
    /// Kinds disabled in configuration get no handler at all, so disabling
    /// a flag means zero subscriber invocations for that kind. Each handler
    /// writes the database first, then syslog, honoring the `target.*`
    /// flags; both sinks run even if the first failed, and the first error
    /// is reported to the dispatch caller.
    pub fn register(&self, dispatcher: &mut AccessControlDispatcher) {
        for kind in AccessEventKind::all() {
            if !self.config.enabled(kind) {
                debug!(event = kind.name(), "audit logging disabled");
                continue;
            }

            let database = self.config.target.database.then(|| self.database.clone());
            let syslog = self.config.target.syslog.then(|| Arc::clone(&self.syslog));

            dispatcher.subscribe(
                kind,
                Box::new(move |event| {
                    let database = database.clone();
                    let syslog = syslog.clone();
                    Box::pin(async move {
                        let mut result = Ok(());
                        if let Some(sink) = &database {
                            result = sink.record(&event).await;
                        }
                        if let Some(sink) = &syslog {
                            let syslog_result = sink.record(&event);
                            if result.is_ok() {
                                result = syslog_result;
                            }
                        }
                        result
                    })
                }),
            );
        }
    }
}
