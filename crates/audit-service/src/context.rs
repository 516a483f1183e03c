//! Event context formatting shared by both sinks

use chrono::SecondsFormat;
use serde::Serialize;

use audit_core::events::AccessEvent;

/// Context serialized into the log line for one event.
///
/// `reason` is resolved to its text and omitted entirely when the event
/// carries none; the other keys are always present (null when unknown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventContext {
    pub datetime: String,
    pub username: Option<String>,
    pub address: String,
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl EventContext {
    /// Build the context map for an event
    pub fn from_event(event: &AccessEvent) -> Self {
        Self {
            datetime: event.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            username: event.username.clone(),
            address: event.ip.clone(),
            target: event.uri.clone(),
            reason: event.reason.map(|r| r.text()),
        }
    }
}

/// Format the message body written to both sinks: `<title>: <json context>`
pub fn format_message(event: &AccessEvent) -> Result<String, serde_json::Error> {
    let context = EventContext::from_event(event);
    Ok(format!(
        "{}: {}",
        event.kind.title(),
        serde_json::to_string(&context)?
    ))
}

/// Truncate to a byte limit without splitting a character
pub fn truncate_to_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
