//! Converter page.
//!
//! The page is a single embedded HTML template; the pandoc probe result is
//! rendered into it on every request.

use axum::{extract::State, response::Html};
use docforge_core::PandocStatus;

use crate::server::GatewayState;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Handler for `GET /`.
pub async fn index(State(state): State<GatewayState>) -> Html<String> {
    let status = state.converter.probe().await;
    Html(render_index(&status))
}

fn render_index(status: &PandocStatus) -> String {
    let (class, disabled) = if status.is_available() {
        ("success", "")
    } else {
        ("error", " disabled")
    };
    INDEX_TEMPLATE
        .replace("{{PANDOC_CLASS}}", class)
        .replace("{{PANDOC_STATUS}}", &markdown::escape_text(status.summary()))
        .replace("{{CONVERT_DISABLED}}", disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestGateway;
    use axum::http::StatusCode;
    use docforge_converter::test_utils::WORKING_PANDOC;

    #[test]
    fn status_text_is_escaped() {
        let page = render_index(&PandocStatus::Success {
            version: "pandoc <3.1>".into(),
        });
        assert!(page.contains(r#"class="status success">pandoc &lt;3.1&gt;</span>"#));
        assert!(page.contains(r#"<button id="convertBtn">"#));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn missing_tool_disables_convert() {
        let page = render_index(&PandocStatus::not_installed());
        assert!(page.contains(r#"class="status error">Pandoc is not installed</span>"#));
        assert!(page.contains(r#"<button id="convertBtn" disabled>"#));
    }

    #[test]
    fn page_ships_file_loader_and_shortcuts() {
        let page = render_index(&PandocStatus::not_installed());
        for needle in [
            r#"id="uploadArea""#,
            r#"<input type="file" id="fileInput" accept=".md,.txt">"#,
            "const MAX_FILE_BYTES = 10 * 1024 * 1024;",
            "event.key === 'Enter'",
            "event.key === 'k'",
            "confirm(",
            "Could not update the preview",
        ] {
            assert!(page.contains(needle), "{needle}");
        }
    }

    #[tokio::test]
    async fn index_embeds_probe_result() {
        let gw = TestGateway::new(WORKING_PANDOC);
        let response = gw.server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("pandoc 3.1.11"));
    }

    #[tokio::test]
    async fn index_without_pandoc_disables_convert() {
        let gw = TestGateway::without_pandoc();
        let page = gw.server.get("/").await.text();
        assert!(page.contains(r#"<button id="convertBtn" disabled>"#));
    }
}
