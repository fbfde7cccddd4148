pub mod error;
pub mod types;

pub use error::{DocForgeError, Result};
pub use types::{
    is_blank, is_text_space, ConversionOutcome, MarkdownRequest, PandocStatus, PreviewResponse, TextStats,
};
