//! One daemon instance bound to one test directory
//!
//! Index state accumulates across the directory's queries, so the session
//! must outlive every verification unit derived from it.

use crate::client;
use crate::common::config::HarnessConfig;
use crate::common::Result;
use crate::corpus::{compile_commands, TestCase};

use super::controller::{DaemonController, JOBS_DONE_MARKER, READY_MARKER};

/// Owns the daemon for the span of one directory's expectations
pub struct DirectorySession {
    controller: DaemonController,
}

impl DirectorySession {
    /// Spawn the daemon, wait for readiness, then register every compile
    /// command of the case. Registration is strictly serialized: one
    /// completion marker observed per command before the next is submitted.
    pub async fn start(config: &HarnessConfig, case: &TestCase) -> Result<Self> {
        let mut controller = DaemonController::spawn(config)?;
        controller
            .wait_for(READY_MARKER, config.timeouts.ready)
            .await?;

        for command in compile_commands(&case.dir, &case.files, &config.compiler) {
            tracing::info!(case = %case.name, file = %command.file, "registering compile command");
            client::run(config, &["-c".to_string(), command.command]).await?;
            controller
                .wait_for(JOBS_DONE_MARKER, config.timeouts.index)
                .await?;
        }

        Ok(Self { controller })
    }

    /// Terminate the daemon and wait for it to release the socket.
    /// Release is also guaranteed without this call: the controller's
    /// child is killed on drop on every other exit path.
    pub async fn shutdown(self, config: &HarnessConfig) -> Result<()> {
        self.controller.shutdown(config.timeouts.shutdown).await
    }
}
