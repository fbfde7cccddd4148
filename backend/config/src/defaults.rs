//! Config defaults.

use crate::schema::{ConverterConfig, LoggingConfig, PathsConfig, ServerConfig};

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";
pub const DEFAULT_DOWNLOADS_DIR: &str = "downloads";
pub const DEFAULT_PANDOC: &str = "pandoc";
/// No timeout: a conversion waits for pandoc as long as it takes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            uploads_dir: DEFAULT_UPLOADS_DIR.into(),
            downloads_dir: DEFAULT_DOWNLOADS_DIR.into(),
            temp_dir: None,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pandoc_path: DEFAULT_PANDOC.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            dir: None,
        }
    }
}
