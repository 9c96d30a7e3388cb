//! End-to-end test harness for a symbol-indexing daemon
//!
//! Drives the external indexing daemon and its query client over a corpus
//! of test directories, verifying location queries against per-directory
//! expectation descriptors.

use clap::Parser;
use index_harness::{cli, commands::Commands, common};

#[derive(Parser)]
#[command(name = "index-harness", about = "End-to-end test harness for a symbol-indexing daemon")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
