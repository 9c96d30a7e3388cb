//! Harness configuration
//!
//! Resolved once at startup into an immutable value and passed explicitly
//! into every component; nothing reads ambient globals afterwards. Defaults
//! come from the host platform, overridable from an optional TOML config
//! file and then from the CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::paths;
use super::{Error, Result};

/// Fully resolved harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Indexing daemon binary
    pub daemon_program: PathBuf,

    /// Query client binary
    pub client_program: PathBuf,

    /// Compiler named in registered compile commands
    pub compiler: String,

    /// Socket the daemon binds
    pub socket_file: PathBuf,

    /// Daemon state file
    pub state_file: PathBuf,

    /// Bounded waits for daemon synchronization
    pub timeouts: Timeouts,
}

/// Timeout settings for the daemon handshake
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// Wait for the readiness marker after spawn
    pub ready: Duration,

    /// Wait for each per-command completion marker during registration
    pub index: Duration,

    /// Wait for a graceful daemon exit before a hard kill
    pub shutdown: Duration,
}

/// CLI-level overrides applied on top of file and platform defaults
#[derive(Debug, Default)]
pub struct Overrides {
    pub daemon: Option<PathBuf>,
    pub client: Option<PathBuf>,
    pub compiler: Option<String>,
    pub ready_secs: Option<u64>,
    pub index_secs: Option<u64>,
}

/// Optional on-disk configuration
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    programs: ProgramsFile,

    #[serde(default)]
    paths: PathsFile,

    #[serde(default)]
    timeouts: TimeoutsFile,
}

#[derive(Debug, Deserialize, Default)]
struct ProgramsFile {
    daemon: Option<PathBuf>,
    client: Option<PathBuf>,
    compiler: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PathsFile {
    socket_file: Option<PathBuf>,
    state_file: Option<PathBuf>,
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
struct TimeoutsFile {
    #[serde(default = "default_ready")]
    ready_secs: u64,

    #[serde(default = "default_index")]
    index_secs: u64,

    #[serde(default = "default_shutdown")]
    shutdown_secs: u64,
}

impl Default for TimeoutsFile {
    fn default() -> Self {
        Self {
            ready_secs: default_ready(),
            index_secs: default_index(),
            shutdown_secs: default_shutdown(),
        }
    }
}

fn default_ready() -> u64 {
    60
}
fn default_index() -> u64 {
    120
}
fn default_shutdown() -> u64 {
    10
}

impl ConfigFile {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if the file doesn't exist
    fn load() -> Result<Self> {
        if let Some(path) = paths::config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                return toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

impl HarnessConfig {
    /// Resolve the configuration: platform defaults, then the optional
    /// config file, then CLI overrides. The daemon and client binaries are
    /// resolved on PATH here so a missing installation fails before any
    /// daemon is spawned.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let file = ConfigFile::load()?;
        Self::from_parts(file, overrides)
    }

    fn from_parts(file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let daemon = overrides
            .daemon
            .or(file.programs.daemon)
            .unwrap_or_else(|| PathBuf::from(paths::DEFAULT_DAEMON));
        let client = overrides
            .client
            .or(file.programs.client)
            .unwrap_or_else(|| PathBuf::from(paths::DEFAULT_CLIENT));
        let compiler = overrides
            .compiler
            .or(file.programs.compiler)
            .unwrap_or_else(|| paths::DEFAULT_COMPILER.to_string());

        Ok(Self {
            daemon_program: find_program(&daemon)?,
            client_program: find_program(&client)?,
            compiler,
            socket_file: file.paths.socket_file.unwrap_or_else(paths::socket_file),
            state_file: file.paths.state_file.unwrap_or_else(paths::state_file),
            timeouts: Timeouts {
                ready: Duration::from_secs(
                    overrides.ready_secs.unwrap_or(file.timeouts.ready_secs),
                ),
                index: Duration::from_secs(
                    overrides.index_secs.unwrap_or(file.timeouts.index_secs),
                ),
                shutdown: Duration::from_secs(file.timeouts.shutdown_secs),
            },
        })
    }
}

fn find_program(program: &Path) -> Result<PathBuf> {
    which::which(program).map_err(|_| Error::BinaryNotFound {
        program: program.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file.timeouts.ready_secs, 60);
        assert_eq!(file.timeouts.index_secs, 120);
        assert_eq!(file.timeouts.shutdown_secs, 10);
        assert!(file.programs.daemon.is_none());
        assert!(file.paths.socket_file.is_none());
    }

    #[test]
    fn test_partial_config_file_overrides() {
        let file: ConfigFile = toml::from_str(
            r#"
[programs]
compiler = "g++"

[timeouts]
ready_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(file.programs.compiler.as_deref(), Some("g++"));
        assert_eq!(file.timeouts.ready_secs, 5);
        assert_eq!(file.timeouts.index_secs, 120);
    }

    #[test]
    fn test_cli_overrides_win_over_file() {
        let file: ConfigFile = toml::from_str("[timeouts]\nready_secs = 5").unwrap();
        let overrides = Overrides {
            ready_secs: Some(1),
            ..Default::default()
        };
        // Binary resolution needs real programs; reuse the test runner's
        // shell, which is always on PATH.
        let sh = which::which("sh").or_else(|_| which::which("cmd")).unwrap();
        let overrides = Overrides {
            daemon: Some(sh.clone()),
            client: Some(sh),
            ..overrides
        };
        let config = HarnessConfig::from_parts(file, overrides).unwrap();
        assert_eq!(config.timeouts.ready, Duration::from_secs(1));
    }

    #[test]
    fn test_missing_binary_is_an_error() {
        let overrides = Overrides {
            daemon: Some(PathBuf::from("definitely-not-a-real-daemon-binary")),
            ..Default::default()
        };
        let err = HarnessConfig::from_parts(ConfigFile::default(), overrides).unwrap_err();
        assert!(matches!(err, Error::BinaryNotFound { .. }));
    }
}
