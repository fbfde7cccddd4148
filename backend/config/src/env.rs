//! Environment variable overrides for config values.
//!
//! Recognised variables:
//! `DOCFORGE_BIND`, `DOCFORGE_PORT`, `DOCFORGE_UPLOADS_DIR`,
//! `DOCFORGE_DOWNLOADS_DIR`, `DOCFORGE_TEMP_DIR`, `DOCFORGE_PANDOC`,
//! `DOCFORGE_TIMEOUT_SECS`, `DOCFORGE_LOG_DIR`. Empty values are ignored.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::str::FromStr;

use crate::schema::DocForgeConfig;

/// Apply overrides from the process environment.
pub fn apply_process_env(config: DocForgeConfig) -> Result<DocForgeConfig> {
    apply_env_overrides(config, &std::env::vars().collect())
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_env_overrides(
    mut config: DocForgeConfig,
    env: &HashMap<String, String>,
) -> Result<DocForgeConfig> {
    let get = |key: &str| env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

    if let Some(bind) = get("DOCFORGE_BIND") {
        config.server.bind = bind.to_string();
    }
    if let Some(port) = get("DOCFORGE_PORT") {
        config.server.port = parse_var("DOCFORGE_PORT", port)?;
    }
    if let Some(dir) = get("DOCFORGE_UPLOADS_DIR") {
        config.paths.uploads_dir = dir.into();
    }
    if let Some(dir) = get("DOCFORGE_DOWNLOADS_DIR") {
        config.paths.downloads_dir = dir.into();
    }
    if let Some(dir) = get("DOCFORGE_TEMP_DIR") {
        config.paths.temp_dir = Some(dir.into());
    }
    if let Some(pandoc) = get("DOCFORGE_PANDOC") {
        config.converter.pandoc_path = pandoc.into();
    }
    if let Some(secs) = get("DOCFORGE_TIMEOUT_SECS") {
        config.converter.timeout_secs = parse_var("DOCFORGE_TIMEOUT_SECS", secs)?;
    }
    if let Some(dir) = get("DOCFORGE_LOG_DIR") {
        config.logging.dir = Some(dir.into());
    }

    Ok(config)
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("Invalid value for env var {name}: \"{raw}\""))
}
