//! `docforge-config`: DocForge runtime configuration.
//!
//! Provides:
//! - Typed config schema (server, paths, converter, logging)
//! - YAML loading with a defaults fallback for missing files
//! - `DOCFORGE_*` environment overrides
//! - Validation with errors and warnings
//! - Startup creation of the uploads/downloads directories

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use env::{apply_env_overrides, apply_process_env};
pub use io::{config_dir, config_file_path, load_config, resolve_config_path};
pub use schema::{ConverterConfig, DocForgeConfig, LoggingConfig, PathsConfig, ServerConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use std::path::Path;
use tokio::fs;

/// Command-line values that take precedence over the file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
}

impl CliOverrides {
    pub fn apply(&self, mut config: DocForgeConfig) -> DocForgeConfig {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }
}

/// Layer defaults, the YAML file, the process environment and `cli`.
///
/// Does not validate or log. Callers run [`check`] once the logger is up.
pub async fn load_layered(path: &Path, cli: &CliOverrides) -> Result<DocForgeConfig> {
    let config = load_config(path).await?;
    let config = apply_process_env(config)?;
    Ok(cli.apply(config))
}

/// Validate `config`, logging warnings. Any validation error is fatal.
pub fn check(config: DocForgeConfig) -> Result<DocForgeConfig> {
    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    if !report.is_valid() {
        for error in &report.errors {
            tracing::error!(path = %error.path, message = %error.message, "Config error");
        }
        let summary: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
        bail!("invalid configuration: {}", summary.join("; "));
    }
    Ok(config)
}

/// Create the uploads, downloads and (if configured) temp directories.
pub async fn ensure_dirs(config: &DocForgeConfig) -> Result<()> {
    let paths = &config.paths;
    let dirs = [
        Some(&paths.uploads_dir),
        Some(&paths.downloads_dir),
        paths.temp_dir.as_ref(),
    ];
    for dir in dirs.into_iter().flatten() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_dirs_creates_missing_directories() {
        let root = tempfile::tempdir().unwrap();
        let mut config = DocForgeConfig::default();
        config.paths.uploads_dir = root.path().join("a/uploads");
        config.paths.downloads_dir = root.path().join("a/downloads");
        config.paths.temp_dir = Some(root.path().join("scratch"));

        ensure_dirs(&config).await.unwrap();
        // idempotent
        ensure_dirs(&config).await.unwrap();

        assert!(config.paths.uploads_dir.is_dir());
        assert!(config.paths.downloads_dir.is_dir());
        assert!(root.path().join("scratch").is_dir());
    }

    #[tokio::test]
    async fn invalid_file_fails_the_check() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("config.yaml");
        std::fs::write(&path, "converter:\n  pandocPath: \"\"\n").unwrap();
        let config = load_layered(&path, &CliOverrides::default()).await.unwrap();
        let err = check(config).unwrap_err();
        assert!(err.to_string().contains("converter.pandocPath"), "{err}");
    }

    #[tokio::test]
    async fn cli_values_override_the_file() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("config.yaml");
        std::fs::write(&path, "server:\n  bind: \"10.0.0.1\"\n  port: 6000\n").unwrap();
        let cli = CliOverrides {
            bind: Some("127.0.0.1".into()),
            port: Some(7000),
        };
        let config = load_layered(&path, &cli).await.unwrap();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 7000);
    }

    #[tokio::test]
    async fn cli_port_zero_is_caught_by_the_check() {
        let root = tempfile::tempdir().unwrap();
        let cli = CliOverrides {
            bind: None,
            port: Some(0),
        };
        let config = load_layered(&root.path().join("absent.yaml"), &cli)
            .await
            .unwrap();
        let err = check(config).unwrap_err();
        assert!(err.to_string().contains("server.port"), "{err}");
    }
}
