//! Daemon process control and output-marker synchronization
//!
//! The daemon is a black box synchronized through literal markers on its
//! merged stdout/stderr stream. Every wait is bounded: a stalled daemon
//! becomes a reported timeout, never an indefinite block.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::common::config::HarnessConfig;
use crate::common::{Error, Result};

/// Printed once the daemon has finished startup and accepts commands
pub const READY_MARKER: &str = "Includepaths";

/// Printed after each registered compile command has been indexed
pub const JOBS_DONE_MARKER: &str = "Jobs took";

/// Handle on one spawned daemon process
///
/// The child is configured kill-on-drop, so an early abort or panic can
/// never leak the process or its socket.
pub struct DaemonController {
    child: Child,
    lines: mpsc::UnboundedReceiver<String>,
}

impl DaemonController {
    /// Spawn the daemon with the fixed socket, state-file and logging
    /// flags: `-n <socket> -d <state> -o -B -C --log-flush`.
    pub fn spawn(config: &HarnessConfig) -> Result<Self> {
        let program = &config.daemon_program;
        tracing::info!(
            daemon = %program.display(),
            socket = %config.socket_file.display(),
            "starting daemon"
        );

        let mut child = Command::new(program)
            .arg("-n")
            .arg(&config.socket_file)
            .arg("-d")
            .arg(&config.state_file)
            .args(["-o", "-B", "-C", "--log-flush"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Spawn {
                program: program.display().to_string(),
                source: e,
            })?;

        // Merge stdout and stderr into one line stream; the daemon logs
        // markers to either depending on its logging mode.
        let (tx, lines) = mpsc::unbounded_channel();
        if let Some(stdout) = child.stdout.take() {
            forward_lines(stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            forward_lines(stderr, tx);
        }

        Ok(Self { child, lines })
    }

    /// Read daemon output until a line containing `marker` appears,
    /// bounded by `limit`. A closed stream means the daemon exited.
    pub async fn wait_for(&mut self, marker: &str, limit: Duration) -> Result<()> {
        let deadline = Instant::now() + limit;
        loop {
            match tokio::time::timeout_at(deadline, self.lines.recv()).await {
                Err(_) => {
                    return Err(Error::MarkerTimeout {
                        marker: marker.to_string(),
                        secs: limit.as_secs(),
                    })
                }
                Ok(None) => {
                    return Err(Error::DaemonExited {
                        marker: marker.to_string(),
                    })
                }
                Ok(Some(line)) => {
                    tracing::debug!(target: "daemon", "{}", line);
                    if line.contains(marker) {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Ask the daemon to exit and wait for it, escalating to a hard kill
    /// if it does not go down within `limit`.
    pub async fn shutdown(mut self, limit: Duration) -> Result<()> {
        self.request_termination();
        match tokio::time::timeout(limit, self.child.wait()).await {
            Ok(status) => {
                let status = status?;
                tracing::info!(%status, "daemon exited");
                Ok(())
            }
            Err(_) => {
                tracing::warn!("daemon ignored termination request, killing it");
                self.child.kill().await?;
                Ok(())
            }
        }
    }

    #[cfg(unix)]
    fn request_termination(&mut self) {
        if let Some(pid) = self.child.id() {
            let _ = unsafe { libc::kill(pid as libc::pid_t, libc::SIGTERM) };
        }
    }

    #[cfg(not(unix))]
    fn request_termination(&mut self) {
        let _ = self.child.start_kill();
    }
}

fn forward_lines<R>(stream: R, tx: mpsc::UnboundedSender<String>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
}
