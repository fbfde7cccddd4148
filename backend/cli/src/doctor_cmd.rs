//! CLI Doctor Command
//!
//! Checks that pandoc answers and that the working directories are usable.

use anyhow::{bail, Result};
use std::path::Path;

use docforge_config::DocForgeConfig;
use docforge_converter::check_pandoc;
use docforge_core::PandocStatus;

/// Executes the full doctor diagnosis.
pub async fn run(config: &DocForgeConfig) -> Result<()> {
    println!("\n🔍 Running DocForge Doctor...\n");

    let pandoc_ok = check_pandoc_installed(&config.converter.pandoc_path).await;
    let dirs_ok = check_directories(config).await;

    println!();
    if pandoc_ok && dirs_ok {
        println!("✅ All checks passed! DocForge is ready to convert.");
        Ok(())
    } else {
        println!("❌ Some checks failed! Please fix the errors above.");
        bail!("doctor checks failed")
    }
}

async fn check_pandoc_installed(pandoc: &Path) -> bool {
    println!("Checking pandoc ({}):", pandoc.display());
    match check_pandoc(pandoc).await {
        PandocStatus::Success { version } => {
            println!("  🟢 {version}");
            true
        }
        PandocStatus::Error { message } => {
            println!("  🔴 {message}");
            false
        }
    }
}

async fn check_directories(config: &DocForgeConfig) -> bool {
    println!("Checking directories:");

    let mut all_good = true;
    let paths = &config.paths;
    let mut checks = vec![("uploads", paths.uploads_dir.as_path()), ("downloads", paths.downloads_dir.as_path())];
    if let Some(temp) = &paths.temp_dir {
        checks.push(("temp", temp.as_path()));
    }

    for (label, dir) in checks {
        match probe_writable(dir).await {
            Ok(()) => println!("  🟢 {label} directory {} is writable", dir.display()),
            Err(e) => {
                println!("  🔴 {label} directory {}: {e}", dir.display());
                all_good = false;
            }
        }
    }

    all_good
}

/// Creates `dir` if needed and round-trips a scratch file through it.
async fn probe_writable(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let probe = dir.join(".docforge-doctor");
    tokio::fs::write(&probe, b"ok").await?;
    tokio::fs::remove_file(&probe).await?;
    Ok(())
}
