use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which Python's `str.isspace` also counts.
pub fn is_text_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True when `text` has nothing but [`is_text_space`] characters.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_text_space)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /api/convert` and `POST /api/preview`.
///
/// A missing `markdown` field is treated the same as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkdownRequest {
    #[serde(default)]
    pub markdown: String,
}

impl MarkdownRequest {
    pub fn is_blank(&self) -> bool {
        is_blank(&self.markdown)
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub const MSG_CONVERTED: &str = "Conversion successful!";
pub const MSG_CONVERSION_FAILED: &str = "Conversion failed!";
pub const MSG_INTERNAL_ERROR: &str = "An error occurred!";
pub const MSG_EMPTY_INPUT: &str = "Please enter some Markdown content!";

/// Result of one conversion attempt as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl ConversionOutcome {
    pub fn succeeded(filename: impl Into<String>) -> Self {
        Self {
            success: true,
            filename: Some(filename.into()),
            error: None,
            message: MSG_CONVERTED.to_string(),
        }
    }

    pub fn failed(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            error: Some(error.into()),
            message: message.into(),
        }
    }

    /// Request refused before any conversion was attempted.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            error: None,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Word, character and line counts of a Markdown source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub html: String,
    pub stats: TextStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PreviewResponse {
    /// Empty preview carrying an error, used when the request itself is unusable.
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tool availability
// ---------------------------------------------------------------------------

pub const MSG_PANDOC_MISSING: &str = "Pandoc is not installed";

/// Outcome of probing the external conversion tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PandocStatus {
    Success { version: String },
    Error { message: String },
}

impl PandocStatus {
    pub fn not_installed() -> Self {
        PandocStatus::Error {
            message: MSG_PANDOC_MISSING.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PandocStatus::Success { .. })
    }

    /// Human-readable one-liner for the index page and the CLI.
    pub fn summary(&self) -> &str {
        match self {
            PandocStatus::Success { version } => version,
            PandocStatus::Error { message } => message,
        }
    }
}
