use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the DocForge converter.
#[derive(Debug, Error)]
pub enum DocForgeError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch {tool}: {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pandoc error: {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },

    #[error("{tool} did not finish within {secs}s")]
    ToolTimeout { tool: String, secs: u64 },

    #[error("converter exited successfully but produced no file at {}", .0.display())]
    MissingOutput(PathBuf),
}

impl DocForgeError {
    /// Whether the external tool ran and reported a failure, as opposed to
    /// the surrounding book-keeping going wrong.
    pub fn is_tool_failure(&self) -> bool {
        matches!(
            self,
            DocForgeError::ToolFailed { .. } | DocForgeError::ToolTimeout { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DocForgeError>;
