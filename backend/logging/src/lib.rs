//! Structured logging for DocForge.
//!
//! Console output plus optional rolling NDJSON files, and a typed event log
//! for conversions and downloads.

pub mod event_logger;
pub mod logger;

pub use event_logger::{EventLogEntry, EventLogger, ServiceEvent};
pub use logger::init_logger;
