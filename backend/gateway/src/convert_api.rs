//! Conversion and preview endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use docforge_core::types::{MSG_EMPTY_INPUT, MSG_INTERNAL_ERROR};
use docforge_core::{ConversionOutcome, MarkdownRequest, PreviewResponse};
use logging::{EventLogger, ServiceEvent};
use tracing::{error, warn};

use crate::server::GatewayState;

/// Handler for `POST /api/convert`.
///
/// Blank input is a 400. Pandoc failures are reported with 200 and
/// `success: false` so the page can show its diagnostics.
pub async fn convert_markdown(
    State(state): State<GatewayState>,
    payload: Result<Json<MarkdownRequest>, JsonRejection>,
) -> (StatusCode, Json<ConversionOutcome>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected convert request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ConversionOutcome::failed(rejection.body_text(), MSG_INTERNAL_ERROR)),
            );
        }
    };

    if request.is_blank() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ConversionOutcome::rejected(MSG_EMPTY_INPUT)),
        );
    }

    let outcome = state.converter.convert(&request.markdown).await;
    match (&outcome.filename, &outcome.error) {
        (Some(filename), _) => EventLogger::log_event(ServiceEvent::Converted {
            filename: filename.clone(),
            input_bytes: request.markdown.len(),
        }),
        (None, Some(error)) => EventLogger::log_event(ServiceEvent::ConversionFailed {
            error: error.clone(),
        }),
        (None, None) => {}
    }

    (StatusCode::OK, Json(outcome))
}

/// Handler for `POST /api/preview`. Always answers 200.
pub async fn preview_markdown(
    payload: Result<Json<MarkdownRequest>, JsonRejection>,
) -> Json<PreviewResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected preview request body");
            return Json(PreviewResponse::with_error(rejection.body_text()));
        }
    };

    // Rendering is CPU-bound; a panic inside the renderer surfaces as a JoinError.
    match tokio::task::spawn_blocking(move || markdown::preview(&request.markdown)).await {
        Ok(preview) => Json(preview),
        Err(e) => {
            error!(error = %e, "Preview rendering failed");
            Json(PreviewResponse::with_error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::TestGateway;
    use axum::http::StatusCode;
    use docforge_converter::test_utils::{BROKEN_PANDOC, WORKING_PANDOC};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn empty_markdown_is_bad_request() {
        let gw = TestGateway::new(WORKING_PANDOC);
        for body in [json!({"markdown": ""}), json!({"markdown": "  \n "}), json!({})] {
            let response = gw.server.post("/api/convert").json(&body).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Please enter some Markdown content!");
        }
        assert!(gw.downloads().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw
            .server
            .post("/api/convert")
            .text("{not json")
            .content_type("application/json")
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn successful_conversion_returns_filename() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw
            .server
            .post("/api/convert")
            .json(&json!({"markdown": "# Title\n\nHello world"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Conversion successful!");
        let filename = body["filename"].as_str().unwrap().to_string();
        assert_eq!(gw.downloads(), vec![filename]);
        assert!(gw.temp_entries().is_empty());
    }

    #[tokio::test]
    async fn tool_failure_is_ok_with_success_false() {
        let gw = TestGateway::new(BROKEN_PANDOC);
        let response = gw
            .server
            .post("/api/convert")
            .json(&json!({"markdown": "# Title"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Conversion failed!");
        assert!(body["error"].as_str().unwrap().starts_with("pandoc error:"));
        assert!(gw.downloads().is_empty());
    }

    #[tokio::test]
    async fn unavailable_tool_adds_no_file() {
        let gw = TestGateway::without_pandoc();
        let response = gw
            .server
            .post("/api/convert")
            .json(&json!({"markdown": "# Title"}))
            .await;

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(gw.downloads().is_empty());
        assert!(gw.temp_entries().is_empty());
    }

    #[tokio::test]
    async fn preview_renders_and_counts() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw
            .server
            .post("/api/preview")
            .json(&json!({"markdown": "# Title\n\nHello world"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Hello world</p>"));
        assert_eq!(body["stats"], json!({"words": 4, "characters": 20, "lines": 3}));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn preview_of_blank_input_is_empty() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw
            .server
            .post("/api/preview")
            .json(&json!({"markdown": "   "}))
            .await;
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({"html": "", "stats": {"words": 0, "characters": 0, "lines": 0}})
        );
    }

    #[tokio::test]
    async fn preview_with_bad_body_still_answers_ok() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw
            .server
            .post("/api/preview")
            .text("[1, 2")
            .content_type("application/json")
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["html"], "");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn preview_accepts_bodies_above_two_megabytes() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let markdown = "word ".repeat(600_000);
        let response = gw
            .server
            .post("/api/preview")
            .json(&json!({ "markdown": markdown }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body.get("error").is_none(), "{:?}", body.get("error"));
        assert_eq!(body["stats"]["words"], 600_000);
    }
}
