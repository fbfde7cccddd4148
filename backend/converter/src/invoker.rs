//! Converter invoker: Markdown text in, `.docx` artifact in the downloads directory out.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use docforge_core::types::{MSG_CONVERSION_FAILED, MSG_INTERNAL_ERROR};
use docforge_core::{ConversionOutcome, DocForgeError, PandocStatus, Result};
use tempfile::TempDir;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::command::run_tool;
use crate::naming::new_artifact_name;
use crate::probe::check_pandoc;

const INPUT_FILE: &str = "input.md";
const OUTPUT_FILE: &str = "output.docx";
const WORKDIR_PREFIX: &str = "docforge-";

/// A converted document stored in the downloads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Runs pandoc against a scoped working directory and publishes its output.
#[derive(Debug, Clone)]
pub struct Converter {
    pandoc: PathBuf,
    downloads_dir: PathBuf,
    /// Parent for per-request working directories; the OS temp dir when unset.
    temp_root: Option<PathBuf>,
    /// `None` waits for pandoc indefinitely.
    timeout: Option<Duration>,
}

impl Converter {
    pub fn new(pandoc: impl Into<PathBuf>, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            pandoc: pandoc.into(),
            downloads_dir: downloads_dir.into(),
            temp_root: None,
            timeout: None,
        }
    }

    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn pandoc_path(&self) -> &Path {
        &self.pandoc
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Probe the configured pandoc binary.
    pub async fn probe(&self) -> PandocStatus {
        check_pandoc(&self.pandoc).await
    }

    /// Converts `markdown` and reports the outcome in client-facing form.
    ///
    /// Every failure is folded into a `success: false` outcome.
    pub async fn convert(&self, markdown: &str) -> ConversionOutcome {
        match self.try_convert(markdown).await {
            Ok(artifact) => ConversionOutcome::succeeded(artifact.filename),
            Err(e) if e.is_tool_failure() => {
                warn!(error = %e, "Pandoc conversion failed");
                ConversionOutcome::failed(e.to_string(), MSG_CONVERSION_FAILED)
            }
            Err(e) => {
                warn!(error = %e, "Conversion aborted");
                ConversionOutcome::failed(e.to_string(), MSG_INTERNAL_ERROR)
            }
        }
    }

    /// Converts `markdown`, returning the stored artifact.
    ///
    /// The working directory is removed on every return path, including early
    /// `?` returns, because it lives in a [`TempDir`] guard.
    #[instrument(skip_all, fields(bytes = markdown.len()))]
    pub async fn try_convert(&self, markdown: &str) -> Result<Artifact> {
        let workdir = self.workdir()?;
        let input = workdir.path().join(INPUT_FILE);
        let output = workdir.path().join(OUTPUT_FILE);

        fs::write(&input, markdown).await?;

        let result = run_tool(&self.pandoc, conversion_args(&input, &output), self.timeout).await?;
        if !result.success() {
            return Err(DocForgeError::ToolFailed {
                code: result.exit_code,
                stderr: result.stderr.trim_end().to_string(),
            });
        }
        if !fs::try_exists(&output).await? {
            return Err(DocForgeError::MissingOutput(output));
        }

        let artifact = self.publish(&output).await?;

        if let Err(e) = workdir.close() {
            warn!(error = %e, "Failed to remove conversion working directory");
        }

        info!(
            filename = %artifact.filename,
            size_bytes = artifact.size_bytes,
            "Stored converted document"
        );
        Ok(artifact)
    }

    fn workdir(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKDIR_PREFIX);
        let dir = match &self.temp_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }

    /// Copies the finished document into the downloads directory. A failed
    /// copy removes whatever part of the destination was written.
    async fn publish(&self, produced: &Path) -> Result<Artifact> {
        let filename = new_artifact_name();
        let dest = self.downloads_dir.join(&filename);

        match fs::copy(produced, &dest).await {
            Ok(size_bytes) => Ok(Artifact {
                filename,
                path: dest,
                size_bytes,
            }),
            Err(e) => {
                let _ = fs::remove_file(&dest).await;
                Err(e.into())
            }
        }
    }
}

/// Fixed pandoc command line for one conversion.
pub fn conversion_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        input.as_os_str().to_owned(),
        "-o".into(),
        output.as_os_str().to_owned(),
        "--from".into(),
        "markdown".into(),
        "--to".into(),
        "docx".into(),
        "--standalone".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_layout() {
        let args = conversion_args(Path::new("/w/input.md"), Path::new("/w/output.docx"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            [
                "/w/input.md",
                "-o",
                "/w/output.docx",
                "--from",
                "markdown",
                "--to",
                "docx",
                "--standalone"
            ]
        );
    }
}
