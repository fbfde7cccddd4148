//! Gateway Health API
//!
//! Pandoc availability for the page, and a liveness endpoint for the process.

use axum::{extract::State, Json};
use docforge_core::PandocStatus;
use serde_json::{json, Value};

use crate::server::GatewayState;

/// Handler for `GET /api/pandoc-status`. Probes on every call.
pub async fn pandoc_status(State(state): State<GatewayState>) -> Json<PandocStatus> {
    Json(state.converter.probe().await)
}

/// Handler for `GET /api/health`.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "docforge",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing::TestGateway;
    use axum::http::StatusCode;
    use docforge_converter::test_utils::WORKING_PANDOC;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn reports_installed_version() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw.server.get("/api/pandoc-status").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, json!({"status": "success", "version": "pandoc 3.1.11"}));
    }

    #[tokio::test]
    async fn reports_missing_tool() {
        let gw = TestGateway::without_pandoc();
        let body: Value = gw.server.get("/api/pandoc-status").await.json();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Pandoc is not installed");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let gw = TestGateway::without_pandoc();
        let body: Value = gw.server.get("/api/health").await.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "docforge");
    }
}
