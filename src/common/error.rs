//! Error types for the harness
//!
//! Every failure surfaces immediately as a failed verification unit; there
//! is no retry policy anywhere. Messages name the external program or the
//! offending line so a failing run can be diagnosed from the report alone.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Corpus / descriptor errors ===
    #[error("Corpus root '{}' is not a directory", .0.display())]
    CorpusRoot(PathBuf),

    #[error("Failed to load descriptor '{path}': {message}")]
    Descriptor { path: String, message: String },

    // === Process errors ===
    #[error("'{program}' not found on PATH. Install it or point the harness at it with --daemon/--client")]
    BinaryNotFound { program: String },

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with status {code:?}: {stderr}")]
    ProcessFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Daemon exited before printing '{marker}'")]
    DaemonExited { marker: String },

    #[error("Timed out after {secs}s waiting for '{marker}' in daemon output")]
    MarkerTimeout { marker: String, secs: u64 },

    // === Verification errors ===
    #[error("Malformed location line '{line}': {reason}")]
    Parse { line: String, reason: String },

    #[error("Expected {expected} locations, got {actual}: [{found}]")]
    CountMismatch {
        expected: usize,
        actual: usize,
        found: String,
    },

    #[error("Expected location {expected} not found in actual results [{found}]")]
    MissingLocation { expected: String, found: String },

    #[error("{failed} verification units failed")]
    SuiteFailed { failed: usize },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error for a malformed location line
    pub fn parse(line: &str, reason: &str) -> Self {
        Self::Parse {
            line: line.to_string(),
            reason: reason.to_string(),
        }
    }
}
