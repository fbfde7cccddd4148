//! Main HTTP Gateway Server.

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use docforge_config::DocForgeConfig;
use docforge_converter::Converter;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::{control_ui, convert_api, downloads, health_api};

/// Application state shared across routes.
///
/// Holds no mutable state; the downloads directory on disk is the only thing
/// requests share.
#[derive(Clone)]
pub struct GatewayState {
    pub converter: Arc<Converter>,
}

impl GatewayState {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter: Arc::new(converter),
        }
    }

    pub fn from_config(config: &DocForgeConfig) -> Self {
        Self::new(converter_from_config(config))
    }
}

/// Converter wired to the configured pandoc binary and directories.
pub fn converter_from_config(config: &DocForgeConfig) -> Converter {
    let converter = Converter::new(&config.converter.pandoc_path, &config.paths.downloads_dir)
        .with_timeout(config.converter.timeout());
    match &config.paths.temp_dir {
        Some(temp) => converter.with_temp_root(temp),
        None => converter,
    }
}

/// Request body ceiling. The page loads files of up to 10 MiB, and JSON
/// escaping can grow them further.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Builds the router with every page and API route.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(control_ui::index))
        .route("/api/convert", post(convert_api::convert_markdown))
        .route("/api/preview", post(convert_api::preview_markdown))
        .route("/api/pandoc-status", get(health_api::pandoc_status))
        .route("/api/health", get(health_api::health))
        .route("/download/:filename", get(downloads::download_file))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the Axum HTTP server and runs until Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn state_follows_config() {
        let mut config = DocForgeConfig::default();
        config.converter.pandoc_path = "/opt/pandoc".into();
        config.converter.timeout_secs = 12;
        config.paths.downloads_dir = "/srv/out".into();

        let state = GatewayState::from_config(&config);
        assert_eq!(state.converter.pandoc_path(), Path::new("/opt/pandoc"));
        assert_eq!(state.converter.downloads_dir(), Path::new("/srv/out"));
        assert_eq!(state.converter.timeout(), Some(Duration::from_secs(12)));
    }
}
