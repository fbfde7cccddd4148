//! Pandoc availability probe.

use std::path::Path;
use std::time::Duration;

use docforge_core::PandocStatus;
use tracing::debug;

use crate::command::run_tool;

/// Upper bound for `--version`, so a wedged binary cannot hang the index page.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs `<pandoc> --version` and reports the first line of its output.
///
/// Never cached: every call spawns a fresh process.
pub async fn check_pandoc(pandoc: &Path) -> PandocStatus {
    match run_tool(pandoc, ["--version"], Some(PROBE_TIMEOUT)).await {
        Ok(out) if out.success() => PandocStatus::Success {
            version: out.stdout.lines().next().unwrap_or_default().to_string(),
        },
        Ok(out) => {
            debug!(exit_code = ?out.exit_code, stderr = %out.stderr.trim_end(), "Pandoc probe failed");
            PandocStatus::not_installed()
        }
        Err(e) => {
            debug!(error = %e, "Pandoc probe failed");
            PandocStatus::not_installed()
        }
    }
}
