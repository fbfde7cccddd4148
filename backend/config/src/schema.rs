//! DocForge runtime configuration schema.
//!
//! Typed for serde YAML deserialization. Every section and field is optional
//! in the file; missing values fall back to [`crate::defaults`].

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration for DocForge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocForgeConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Working and artifact directories
    pub paths: PathsConfig,
    /// External pandoc invocation
    pub converter: ConverterConfig,
    /// Log level and optional file output
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address '{}': {e}", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathsConfig {
    /// Created at startup; nothing is written there yet.
    pub uploads_dir: PathBuf,
    /// Flat store of converted documents.
    pub downloads_dir: PathBuf,
    /// Parent of per-conversion working directories (OS temp dir when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Program name (looked up on `PATH`) or absolute path.
    pub pandoc_path: PathBuf,
    /// `0` disables the timeout.
    pub timeout_secs: u64,
}

impl ConverterConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Directory for rolling JSON log files; console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}
