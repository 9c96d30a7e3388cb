//! Query client invocation
//!
//! Every request to the daemon goes through one synchronous invocation of
//! the external query client, always carrying the session socket flag.

use std::process::Stdio;

use tokio::process::Command;

use crate::common::config::HarnessConfig;
use crate::common::{Error, Result};

/// Invoke the query client with `--socket-file=<path>` plus `args` and
/// return its captured stdout. A non-zero exit is a process error carrying
/// the client's stderr.
pub async fn run(config: &HarnessConfig, args: &[String]) -> Result<String> {
    let program = &config.client_program;
    tracing::debug!(client = %program.display(), ?args, "running query client");

    let output = Command::new(program)
        .arg(format!("--socket-file={}", config.socket_file.display()))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| Error::Spawn {
            program: program.display().to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(Error::ProcessFailed {
            program: program.display().to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
