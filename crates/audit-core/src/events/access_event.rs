//! Access-control event payload and event kinds

use chrono::{DateTime, TimeZone, Utc};

use super::FailureReason;

/// The six access-control event types this workspace records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessEventKind {
    LoginSuccess,
    LoginFailure,
    LogoutSuccess,
    CheckRequest,
    CheckSuccess,
    CheckFailure,
}

impl AccessEventKind {
    /// Wire name of the event, as stored in the `event` column
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "login.success",
            Self::LoginFailure => "login.failure",
            Self::LogoutSuccess => "logout.success",
            Self::CheckRequest => "access.check.request",
            Self::CheckSuccess => "access.check.success",
            Self::CheckFailure => "access.check.failure",
        }
    }

    /// Human-readable title used in formatted log messages
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "Authentication success",
            Self::LoginFailure => "Authentication failure",
            Self::LogoutSuccess => "Logout success",
            Self::CheckRequest => "Access check request",
            Self::CheckSuccess => "Access check success",
            Self::CheckFailure => "Access check failure",
        }
    }

    /// All six kinds, in a stable order
    pub fn all() -> [AccessEventKind; 6] {
        [
            Self::LoginSuccess,
            Self::LoginFailure,
            Self::LogoutSuccess,
            Self::CheckRequest,
            Self::CheckSuccess,
            Self::CheckFailure,
        ]
    }
}

/// An access-control event as dispatched by the host application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub kind: AccessEventKind,
    pub reason: Option<FailureReason>,
    pub timestamp: DateTime<Utc>,
    pub username: Option<String>,
    pub ip: String,
    pub uri: Option<String>,
}

impl AccessEvent {
    /// Create an event with the fields every event carries
    pub fn new(kind: AccessEventKind, ip: impl Into<String>) -> Self {
        Self {
            kind,
            reason: None,
            timestamp: Utc::now(),
            username: None,
            ip: ip.into(),
            uri: None,
        }
    }

    /// Attach the failure reason
    pub fn with_reason(mut self, reason: FailureReason) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Attach the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Attach the target URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the event time from unix seconds, for hosts that carry raw
    /// timestamps. Out-of-range values fall back to the current time.
    pub fn at_unix_timestamp(mut self, secs: i64) -> Self {
        self.timestamp = Utc.timestamp_opt(secs, 0).single().unwrap_or_else(Utc::now);
        self
    }
}
