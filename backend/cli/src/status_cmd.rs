//! CLI Status Command
//!
//! Prints the same JSON as `GET /api/pandoc-status`.

use anyhow::Result;
use docforge_config::DocForgeConfig;
use docforge_converter::check_pandoc;

pub async fn run(config: &DocForgeConfig) -> Result<()> {
    let status = check_pandoc(&config.converter.pandoc_path).await;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
