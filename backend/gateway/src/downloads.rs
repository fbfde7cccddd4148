//! Download route for converted documents.
//!
//! Serves files from the downloads directory by name. Anything that is not a
//! plain file name inside that directory is answered as missing.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use logging::{EventLogger, ServiceEvent};
use serde_json::json;
use tokio::fs;
use tracing::{debug, warn};

use crate::server::GatewayState;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// GET /download/:filename: send a stored document as an attachment.
pub async fn download_file(
    State(state): State<GatewayState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_plain_filename(&filename) {
        warn!(filename = %filename, "Rejected suspicious download path");
        return not_found(filename);
    }

    let path = state.converter.downloads_dir().join(&filename);
    let is_file = fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return not_found(filename);
    }

    debug!(path = %path.display(), "Serving download");
    match fs::read(&path).await {
        Ok(bytes) => {
            EventLogger::log_event(ServiceEvent::Downloaded {
                filename: filename.clone(),
                size_bytes: bytes.len(),
            });
            let headers = [
                (header::CONTENT_TYPE, HeaderValue::from_static(mime_for(&filename))),
                (header::CONTENT_DISPOSITION, attachment_disposition(&filename)),
            ];
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read download");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

fn not_found(filename: String) -> Response {
    EventLogger::log_event(ServiceEvent::DownloadMissing { filename });
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "File does not exist" })),
    )
        .into_response()
}

/// A single path component: no separators, not `.` or `..`.
fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "docx" => DOCX_MIME,
        "md" => "text/markdown",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// `attachment; filename="..."`, dropping the name when it cannot be quoted
/// safely in a header.
fn attachment_disposition(filename: &str) -> HeaderValue {
    let quotable = filename
        .chars()
        .all(|c| (c.is_ascii_graphic() || c == ' ') && c != '"');
    if quotable {
        if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\"")) {
            return value;
        }
    }
    HeaderValue::from_static("attachment")
}
