//! External tool runner: spawn, capture output, optionally bound by a timeout.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use docforge_core::{DocForgeError, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// Captured result of one finished tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs `program` with `args` and waits for it to exit.
///
/// Without a `timeout` this waits indefinitely. When the timeout elapses the
/// child is killed and [`DocForgeError::ToolTimeout`] is returned.
pub async fn run_tool<I, S>(program: &Path, args: I, timeout: Option<Duration>) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let tool = program.display().to_string();

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!(tool = %tool, "Spawning external tool");
    let child = cmd.spawn().map_err(|source| DocForgeError::ToolSpawn {
        tool: tool.clone(),
        source,
    })?;

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(tool = %tool, secs = limit.as_secs(), "External tool timed out; killed");
                return Err(DocForgeError::ToolTimeout {
                    tool,
                    secs: limit.as_secs(),
                });
            }
        },
        None => child.wait_with_output().await?,
    };

    let code = output.status.code();
    debug!(tool = %tool, exit_code = ?code, "External tool exited");

    Ok(ToolOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: code,
    })
}
