//! Config validation with user-friendly error messages.

use crate::schema::DocForgeConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &DocForgeConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_server(config, &mut report);
    validate_paths(config, &mut report);
    validate_converter(config, &mut report);
    report
}

fn validate_server(config: &DocForgeConfig, report: &mut ValidationReport) {
    let server = &config.server;
    if let Err(e) = server.socket_addr() {
        report.error("server.bind", e.to_string());
    }
    if server.port == 0 {
        report.error("server.port", "port must be > 0");
    } else if server.port < 1024 {
        report.warn(
            "server.port",
            format!("Port {} requires elevated privileges; consider using a port >= 1024", server.port),
        );
    }
}

fn validate_paths(config: &DocForgeConfig, report: &mut ValidationReport) {
    let paths = &config.paths;
    if paths.downloads_dir.as_os_str().is_empty() {
        report.error("paths.downloadsDir", "downloadsDir cannot be empty");
    }
    if paths.uploads_dir == paths.downloads_dir {
        report.error("paths.uploadsDir", "uploadsDir and downloadsDir must differ");
    }
    if let Some(temp) = &paths.temp_dir {
        if temp.starts_with(&paths.downloads_dir) {
            report.warn(
                "paths.tempDir",
                "tempDir is inside downloadsDir; working directories become downloadable while a conversion runs",
            );
        }
    }
}

fn validate_converter(config: &DocForgeConfig, report: &mut ValidationReport) {
    if config.converter.pandoc_path.as_os_str().is_empty() {
        report.error("converter.pandocPath", "pandocPath cannot be empty");
    }
}
