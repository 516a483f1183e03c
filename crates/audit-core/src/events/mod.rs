//! Access-control events dispatched by the host application

mod access_event;
mod reason;

pub use access_event::{AccessEvent, AccessEventKind};
pub use reason::FailureReason;
