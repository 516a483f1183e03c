//! Access-control event dispatcher
//!
//! A plain observer registry standing in for the host's event bus: the
//! subscriber registers handlers per event kind, the host pushes events
//! through [`AccessControlDispatcher::dispatch`]. Handlers run sequentially
//! in the caller's task; there is no queue, no retry, and no background
//! work.

use std::collections::HashMap;

use futures::future::BoxFuture;

use audit_core::events::{AccessEvent, AccessEventKind};

use crate::error::ServiceResult;

/// Boxed async event handler
pub type EventHandler =
    Box<dyn Fn(AccessEvent) -> BoxFuture<'static, ServiceResult<()>> + Send + Sync>;

/// Observer registry for access-control events
#[derive(Default)]
pub struct AccessControlDispatcher {
    handlers: HashMap<AccessEventKind, Vec<EventHandler>>,
}

impl AccessControlDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind
    pub fn subscribe(&mut self, kind: AccessEventKind, handler: EventHandler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Number of handlers registered for a kind
    pub fn handler_count(&self, kind: AccessEventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Dispatch one event to every handler registered for its kind.
    ///
    /// Handlers run in registration order, each awaited to completion within
    /// the caller's task. Every handler runs even if an earlier one failed;
    /// the first error is returned afterwards.
    pub async fn dispatch(&self, event: &AccessEvent) -> ServiceResult<()> {
        let mut first_error = None;

        if let Some(handlers) = self.handlers.get(&event.kind) {
            for handler in handlers {
                if let Err(e) = handler(event.clone()).await {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
