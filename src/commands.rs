//! CLI command definitions
//!
//! Defines the clap commands for the harness binary.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the test corpus against the indexing daemon
    Run {
        /// Corpus root: each subdirectory is one test case
        corpus: PathBuf,

        /// Only run cases whose name contains this substring
        #[arg(long)]
        filter: Option<String>,

        /// Indexing daemon binary (default: rdm on PATH)
        #[arg(long)]
        daemon: Option<PathBuf>,

        /// Query client binary (default: rc on PATH)
        #[arg(long)]
        client: Option<PathBuf>,

        /// Compiler named in registered compile commands
        #[arg(long)]
        compiler: Option<String>,

        /// Seconds to wait for the daemon readiness marker
        #[arg(long)]
        ready_timeout: Option<u64>,

        /// Seconds to wait for each indexing-completion marker
        #[arg(long)]
        index_timeout: Option<u64>,
    },

    /// List discovered test cases without running them
    List {
        /// Corpus root
        corpus: PathBuf,
    },
}
