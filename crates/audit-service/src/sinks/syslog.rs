//! Syslog sink
//!
//! Formats one line per event and hands it to a [`SyslogWrite`]
//! implementation. The default implementation talks to the local syslog
//! daemon over a Unix datagram socket.

use std::io;

use audit_core::events::AccessEvent;

use crate::context::format_message;
use crate::error::ServiceResult;

/// Syslog facility "auth"
const FACILITY_AUTH: u8 = 4;
/// Severity code for informational messages
const SEVERITY_INFO: u8 = 6;

/// Destination for formatted syslog lines
pub trait SyslogWrite: Send + Sync {
    /// Write one complete datagram
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes one line per audit event to syslog, facility auth
pub struct SyslogSink {
    writer: Box<dyn SyslogWrite>,
    ident: String,
}

impl SyslogSink {
    /// Create a sink over the injected writer, tagged with the
    /// application-branded ident
    pub fn new(writer: Box<dyn SyslogWrite>, ident: impl Into<String>) -> Self {
        Self {
            writer,
            ident: ident.into(),
        }
    }

    /// Emit one event at info level.
    ///
    /// Write failures propagate; there is no retry and no buffering.
    pub fn record(&self, event: &AccessEvent) -> ServiceResult<()> {
        let body = format_message(event)?;
        let line = self.format_line(SEVERITY_INFO, "INFO", &body);
        self.writer.write_line(&line)?;
        Ok(())
    }

    /// BSD-style tag line: `<PRI>ident[pid]: audit.LEVEL: body`
    /// with PRI = facility * 8 + severity.
    fn format_line(&self, severity: u8, level_name: &str, body: &str) -> String {
        let pri = FACILITY_AUTH * 8 + severity;
        format!(
            "<{}>{}[{}]: audit.{}: {}",
            pri,
            self.ident,
            std::process::id(),
            level_name,
            body
        )
    }
}

/// Syslog over the local daemon's Unix datagram socket
#[cfg(unix)]
pub struct UnixSyslog {
    socket: std::os::unix::net::UnixDatagram,
}

#[cfg(unix)]
impl UnixSyslog {
    /// Connect to the local syslog daemon.
    ///
    /// Tries the common socket paths in order.
    pub fn connect() -> io::Result<Self> {
        let socket = std::os::unix::net::UnixDatagram::unbound()?;

        let paths = ["/dev/log", "/var/run/syslog", "/var/run/log"];
        for path in &paths {
            if std::path::Path::new(path).exists() {
                socket.connect(path)?;
                return Ok(Self { socket });
            }
        }

        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no syslog socket found",
        ))
    }
}

#[cfg(unix)]
impl SyslogWrite for UnixSyslog {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.socket.send(line.as_bytes())?;
        Ok(())
    }
}
