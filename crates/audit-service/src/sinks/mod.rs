//! Output sinks for audit records

mod database;
mod syslog;

pub use database::DatabaseSink;
pub use syslog::{SyslogSink, SyslogWrite};

#[cfg(unix)]
pub use syslog::UnixSyslog;
