//! Config file discovery and loading.

use crate::schema::DocForgeConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the DocForge config directory.
/// Priority: `DOCFORGE_CONFIG_DIR` env > `~/.docforge/` > `./.docforge/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DOCFORGE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".docforge");
    }
    PathBuf::from(".docforge")
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Pick the config file: explicit path > `DOCFORGE_CONFIG` env > default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var("DOCFORGE_CONFIG") {
        return PathBuf::from(path);
    }
    config_file_path(&config_dir())
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<DocForgeConfig> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Ok(DocForgeConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file is a valid "all defaults" config.
    if raw.trim().is_empty() {
        return Ok(DocForgeConfig::default());
    }

    let config: DocForgeConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    Ok(config)
}
