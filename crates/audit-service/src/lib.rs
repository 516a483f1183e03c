//! # audit-service
//!
//! Application layer: the access-control event dispatcher, the database and
//! syslog sinks, and the subscriber that wires configuration flags to
//! handler registration.
//!
//! The host constructs an [`AuditSubscriber`] with its collaborators, calls
//! [`AuditSubscriber::register`] against a dispatcher, and pushes each
//! access-control event through [`AccessControlDispatcher::dispatch`] inside
//! the request cycle that triggered it.

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod sinks;
pub mod subscriber;

// Re-export commonly used types at crate root
pub use context::{format_message, EventContext};
pub use dispatcher::{AccessControlDispatcher, EventHandler};
pub use error::{ServiceError, ServiceResult};
pub use sinks::{DatabaseSink, SyslogSink, SyslogWrite};
pub use subscriber::AuditSubscriber;

#[cfg(unix)]
pub use sinks::UnixSyslog;
