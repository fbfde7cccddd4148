//! DocForge Gateway HTTP Server
//!
//! Serves the converter page, the JSON API (`/api/convert`, `/api/preview`,
//! `/api/pandoc-status`), and downloads of converted documents.

pub mod control_ui;
pub mod convert_api;
pub mod downloads;
pub mod health_api;
pub mod server;

#[cfg(test)]
mod testing;

pub use server::{build_router, converter_from_config, start_server, GatewayState};
