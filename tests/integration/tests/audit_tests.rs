//! End-to-end tests for the subscriber → dispatcher → sink path
//!
//! These run the real subscriber and dispatcher against in-memory doubles,
//! so every assertion here holds without PostgreSQL or a syslog daemon.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use audit_common::AuditConfig;
use audit_core::events::{AccessEvent, AccessEventKind, FailureReason};
use audit_core::traits::AuditLogRepository;
use audit_service::{AccessControlDispatcher, AuditSubscriber};
use integration_tests::{MemoryAuditLogRepository, MemorySyslog, SharedSyslog};

fn all_enabled() -> AuditConfig {
    let mut config = AuditConfig::default();
    config.logging.check.request = true;
    config
}

fn build(
    config: AuditConfig,
) -> (
    AccessControlDispatcher,
    Arc<MemoryAuditLogRepository>,
    Arc<MemorySyslog>,
) {
    let repo = MemoryAuditLogRepository::new();
    let syslog = MemorySyslog::new();

    let subscriber = AuditSubscriber::new(
        config,
        Arc::clone(&repo) as Arc<dyn AuditLogRepository>,
        Box::new(SharedSyslog(Arc::clone(&syslog))),
    );

    let mut dispatcher = AccessControlDispatcher::new();
    subscriber.register(&mut dispatcher);

    (dispatcher, repo, syslog)
}

#[tokio::test]
async fn test_each_kind_produces_one_row_and_one_line() {
    let (dispatcher, repo, syslog) = build(all_enabled());

    for kind in AccessEventKind::all() {
        let event = AccessEvent::new(kind, "192.168.0.9").with_username("carol");
        dispatcher.dispatch(&event).await.unwrap();
    }

    assert_eq!(repo.len(), 6);
    assert_eq!(syslog.len(), 6);

    let records = repo.fetch_all().await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.event.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "login.success",
            "login.failure",
            "logout.success",
            "access.check.request",
            "access.check.success",
            "access.check.failure",
        ]
    );

    for (record, line) in records.iter().zip(syslog.lines()) {
        assert_eq!(record.ip, "192.168.0.9");
        assert_eq!(record.username.as_deref(), Some("carol"));
        // The same formatted body lands in the message column and the line
        assert!(line.ends_with(&record.message), "line: {line}");
    }
}

#[tokio::test]
async fn test_database_target_only() {
    let mut config = all_enabled();
    config.target.syslog = false;
    let (dispatcher, repo, syslog) = build(config);

    let event = AccessEvent::new(AccessEventKind::LoginSuccess, "10.1.1.1");
    dispatcher.dispatch(&event).await.unwrap();

    assert_eq!(repo.len(), 1);
    assert!(syslog.is_empty());
}

#[tokio::test]
async fn test_syslog_target_only() {
    let mut config = all_enabled();
    config.target.database = false;
    let (dispatcher, repo, syslog) = build(config);

    let event = AccessEvent::new(AccessEventKind::LoginSuccess, "10.1.1.1");
    dispatcher.dispatch(&event).await.unwrap();

    assert!(repo.is_empty());
    assert_eq!(syslog.len(), 1);
}

#[tokio::test]
async fn test_reason_text_reaches_both_sinks() {
    let cases = [
        (FailureReason::Password, "Incorrect password"),
        (FailureReason::Invalid, "Account invalid"),
        (FailureReason::Disabled, "Account disabled"),
        (FailureReason::Locked, "Account locked"),
    ];

    for (reason, text) in cases {
        let (dispatcher, repo, syslog) = build(all_enabled());
        let event =
            AccessEvent::new(AccessEventKind::LoginFailure, "10.0.0.5").with_reason(reason);
        dispatcher.dispatch(&event).await.unwrap();

        let records = repo.fetch_all().await.unwrap();
        assert_eq!(records[0].reason, Some(reason));
        assert!(records[0].message.contains(text), "message: {}", records[0].message);
        assert!(syslog.lines()[0].contains(&format!("\"reason\":\"{text}\"")));
    }
}

#[tokio::test]
async fn test_event_without_reason_has_no_reason_field() {
    let (dispatcher, repo, syslog) = build(all_enabled());

    let event = AccessEvent::new(AccessEventKind::LoginSuccess, "10.0.0.5").with_username("dave");
    dispatcher.dispatch(&event).await.unwrap();

    let records = repo.fetch_all().await.unwrap();
    assert_eq!(records[0].reason, None);
    assert!(!syslog.lines()[0].contains("reason"));
}

#[tokio::test]
async fn test_disabled_flag_means_zero_invocations() {
    let mut config = all_enabled();
    config.logging.login.failure = false;
    let (dispatcher, repo, syslog) = build(config);

    assert_eq!(dispatcher.handler_count(AccessEventKind::LoginFailure), 0);

    let event = AccessEvent::new(AccessEventKind::LoginFailure, "10.0.0.5")
        .with_reason(FailureReason::Password);
    dispatcher.dispatch(&event).await.unwrap();

    assert!(repo.is_empty());
    assert!(syslog.is_empty());
}

#[tokio::test]
async fn test_missing_table_does_not_fail_the_caller() {
    let (dispatcher, repo, syslog) = build(all_enabled());
    repo.set_table_missing(true);

    let event = AccessEvent::new(AccessEventKind::LoginSuccess, "10.0.0.5");
    dispatcher.dispatch(&event).await.unwrap();

    // No row landed, but the syslog target still got its line
    assert!(repo.is_empty());
    assert_eq!(syslog.len(), 1);

    // Once the table exists again, writes resume
    repo.set_table_missing(false);
    dispatcher.dispatch(&event).await.unwrap();
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_locked_login_failure_example() {
    let (dispatcher, repo, syslog) = build(all_enabled());

    let event = AccessEvent::new(AccessEventKind::LoginFailure, "10.0.0.5")
        .with_username("alice")
        .with_uri("/admin/login")
        .with_reason(FailureReason::Locked)
        .at_unix_timestamp(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap().timestamp());

    dispatcher.dispatch(&event).await.unwrap();

    let lines = syslog.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("<38>audit["));
    assert!(lines[0].contains(
        "Authentication failure: {\"datetime\":\"2024-06-01T12:00:00Z\",\
         \"username\":\"alice\",\"address\":\"10.0.0.5\",\
         \"target\":\"/admin/login\",\"reason\":\"Account locked\"}"
    ));

    // The context is well-formed JSON, not just a lookalike string
    let json_start = lines[0].find('{').unwrap();
    let context: serde_json::Value = serde_json::from_str(&lines[0][json_start..]).unwrap();
    assert_eq!(context["username"], "alice");
    assert_eq!(context["address"], "10.0.0.5");
    assert_eq!(context["target"], "/admin/login");
    assert_eq!(context["reason"], "Account locked");

    let records = repo.fetch_all().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.event, "login.failure");
    assert_eq!(record.reason, Some(FailureReason::Locked));
    assert_eq!(record.reason.unwrap().code(), 4);
    assert_eq!(record.username.as_deref(), Some("alice"));
    assert_eq!(record.ip, "10.0.0.5");
    assert_eq!(record.uri.as_deref(), Some("/admin/login"));
}
