mod convert_cmd;
mod doctor_cmd;
mod status_cmd;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use docforge_config::{load_layered, resolve_config_path, CliOverrides, DocForgeConfig};
use docforge_gateway::{start_server, GatewayState};

#[derive(Parser)]
#[command(name = "docforge")]
#[command(about = "DocForge: paste Markdown, preview it, download a Word document")]
#[command(version)]
struct Cli {
    /// Path to the YAML config file (default: $DOCFORGE_CONFIG or ~/.docforge/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind the HTTP server to
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Convert a Markdown file to .docx in the downloads directory
    Convert {
        /// Markdown source file
        input: PathBuf,
    },
    /// Print the HTML preview and statistics of a Markdown file as JSON
    Preview {
        /// Markdown source file
        input: PathBuf,
    },
    /// Show whether pandoc is installed
    Status,
    /// Check pandoc and the working directories
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.as_deref());
    let overrides = match &cli.command {
        Commands::Serve { port, bind } => CliOverrides {
            bind: bind.clone(),
            port: *port,
        },
        _ => CliOverrides::default(),
    };
    let config = load_layered(&config_path, &overrides).await?;

    if let Some(dir) = &config.logging.dir {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    logging::init_logger(&config.logging.level, config.logging.dir.as_deref())?;

    let from_file = tokio::fs::try_exists(&config_path).await.unwrap_or(false);
    let config = docforge_config::check(config)?;
    info!(path = %config_path.display(), from_file, "Configuration ready");

    match cli.command {
        Commands::Serve { .. } => run_server(config).await?,
        Commands::Convert { input } => convert_cmd::convert(&config, &input).await?,
        Commands::Preview { input } => convert_cmd::preview(&input).await?,
        Commands::Status => status_cmd::run(&config).await?,
        Commands::Doctor => doctor_cmd::run(&config).await?,
    }

    Ok(())
}

async fn run_server(config: DocForgeConfig) -> Result<()> {
    docforge_config::ensure_dirs(&config).await?;
    let addr = config.server.socket_addr()?;

    info!(
        addr = %addr,
        pandoc = %config.converter.pandoc_path.display(),
        downloads = %config.paths.downloads_dir.display(),
        "Starting DocForge"
    );

    let state = GatewayState::from_config(&config);
    let status = state.converter.probe().await;
    if status.is_available() {
        info!(version = %status.summary(), "Pandoc found");
    } else {
        tracing::warn!("Pandoc not found; conversions will fail until it is installed");
    }

    start_server(addr, state).await
}
