//! CLI Convert / Preview Commands
//!
//! Run the converter or the previewer once against a file on disk.

use anyhow::{bail, Context, Result};
use std::path::Path;

use docforge_config::DocForgeConfig;
use docforge_core::is_blank;
use docforge_gateway::converter_from_config;

async fn read_source(input: &Path) -> Result<String> {
    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read Markdown file: {}", input.display()))
}

/// Converts `input` and prints the path of the stored document.
pub async fn convert(config: &DocForgeConfig, input: &Path) -> Result<()> {
    let markdown = read_source(input).await?;
    if is_blank(&markdown) {
        bail!("{} is empty; nothing to convert", input.display());
    }

    docforge_config::ensure_dirs(config).await?;
    let converter = converter_from_config(config);
    let outcome = converter.convert(&markdown).await;

    match outcome.filename {
        Some(filename) => {
            println!("{}", converter.downloads_dir().join(filename).display());
            Ok(())
        }
        None => bail!(
            "{} {}",
            outcome.message,
            outcome.error.unwrap_or_default()
        ),
    }
}

/// Prints the preview JSON the web page would receive for `input`.
pub async fn preview(input: &Path) -> Result<()> {
    let markdown = read_source(input).await?;
    let preview = markdown::preview(&markdown);
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
