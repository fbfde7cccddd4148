//! Service Event Logger
//!
//! Structured events (conversion, download) emitted under a dedicated
//! `docforge_events` target so they can be filtered or shipped separately.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServiceEvent {
    Converted {
        filename: String,
        input_bytes: usize,
    },
    ConversionFailed {
        error: String,
    },
    Downloaded {
        filename: String,
        size_bytes: usize,
    },
    DownloadMissing {
        filename: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: ServiceEvent,
}

impl EventLogEntry {
    pub fn now(event: ServiceEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

pub struct EventLogger;

impl EventLogger {
    /// Stamps `event` and hands it to the tracing system.
    pub fn log_event(event: ServiceEvent) {
        let entry = EventLogEntry::now(event);
        info!(target: "docforge_events", event = ?entry, "Service event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_tagged_by_type() {
        let entry = EventLogEntry::now(ServiceEvent::Converted {
            filename: "converted_0a1b2c3d_20240307_090542.docx".into(),
            input_bytes: 42,
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["event"]["type"], "converted");
        assert_eq!(value["event"]["input_bytes"], 42);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn download_miss_keeps_requested_name() {
        let value = serde_json::to_value(ServiceEvent::DownloadMissing {
            filename: "nope.docx".into(),
        })
        .unwrap();
        assert_eq!(value["type"], "download_missing");
        assert_eq!(value["filename"], "nope.docx");
    }
}
