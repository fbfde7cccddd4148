//! Code block markup for syntax highlighting.
//!
//! Every code block is emitted as
//! `<div class="codehilite"><pre><code class="language-LANG">...</code></pre></div>`
//! so the browser-side highlighter can pick it up by class name.

use pulldown_cmark::escape::escape_html;
use pulldown_cmark::{CodeBlockKind, Event, Tag};

/// Buffers the text of each code block and replaces the block with a single
/// pre-rendered HTML event. All other events pass through untouched.
pub fn highlight_code_blocks<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut output = Vec::new();
    // (language, accumulated source) of the block being read
    let mut open: Option<(String, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or("").to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                open = Some((lang, String::new()));
            }
            Event::Text(text) => match open.as_mut() {
                Some((_, source)) => source.push_str(&text),
                None => output.push(Event::Text(text)),
            },
            Event::End(Tag::CodeBlock(kind)) => match open.take() {
                Some((lang, source)) => {
                    output.push(Event::Html(render_code_block(&lang, &source).into()))
                }
                None => output.push(Event::End(Tag::CodeBlock(kind))),
            },
            other => output.push(other),
        }
    }

    output
}

fn render_code_block(lang: &str, source: &str) -> String {
    let code = escape_text(source);
    if lang.is_empty() {
        format!("<div class=\"codehilite\"><pre><code>{code}</code></pre></div>\n")
    } else {
        let lang = escape_text(lang);
        format!(
            "<div class=\"codehilite\"><pre><code class=\"language-{lang}\">{code}</code></pre></div>\n"
        )
    }
}

/// HTML-escapes `text` for use in element content or a quoted attribute.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = escape_html(&mut escaped, text);
    escaped
}
