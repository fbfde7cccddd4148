//! HTML renderer for the preview pane.

use pulldown_cmark::{html, Options, Parser};

use crate::code_block::highlight_code_blocks;

pub struct Renderer;

impl Renderer {
    /// Parser extensions enabled for every preview. Fenced code is part of
    /// CommonMark and needs no flag.
    pub fn options() -> Options {
        Options::ENABLE_TABLES
    }

    /// Renders Markdown to an HTML fragment.
    pub fn to_html(markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let events = highlight_code_blocks(parser);

        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());
        output
    }
}
