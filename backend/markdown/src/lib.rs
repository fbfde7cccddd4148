//! Markdown preview rendering and text statistics.
//!
//! Renders Markdown into the HTML shown in the browser preview pane, using a
//! fixed extension set: tables, fenced code blocks, and `codehilite` markup
//! around every code block for the client-side highlighter.

pub mod code_block;
pub mod renderer;
pub mod stats;

pub use code_block::escape_text;
pub use renderer::Renderer;
pub use stats::text_statistics;

use docforge_core::{is_blank, PreviewResponse};

/// Render `markdown` and count its words, characters and lines.
///
/// Blank input short-circuits to an empty preview without touching the renderer.
pub fn preview(markdown: &str) -> PreviewResponse {
    if is_blank(markdown) {
        return PreviewResponse::default();
    }
    PreviewResponse {
        html: Renderer::to_html(markdown),
        stats: text_statistics(markdown),
        error: None,
    }
}
