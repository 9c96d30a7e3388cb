//! CLI command handling
//!
//! Dispatches CLI commands and formats the suite summary.

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::{HarnessConfig, Overrides};
use crate::common::{Error, Result};
use crate::{corpus, runner};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            corpus,
            filter,
            daemon,
            client,
            compiler,
            ready_timeout,
            index_timeout,
        } => {
            let config = HarnessConfig::resolve(Overrides {
                daemon,
                client,
                compiler,
                ready_secs: ready_timeout,
                index_secs: index_timeout,
            })?;

            let report = runner::run_suite(&config, &corpus, filter.as_deref()).await?;

            println!();
            if report.all_passed() {
                println!(
                    "{} {} verification units passed",
                    "✓".green().bold(),
                    report.passed()
                );
                Ok(())
            } else {
                println!(
                    "{} {} passed, {} failed",
                    "✗".red().bold(),
                    report.passed(),
                    report.failed()
                );
                Err(Error::SuiteFailed {
                    failed: report.failed(),
                })
            }
        }

        Commands::List { corpus } => {
            let cases = corpus::discover(&corpus)?;
            for case in &cases {
                let sources = case.files.iter().filter(|f| f.ends_with(".cpp")).count();
                println!(
                    "{} ({} units, {} sources)",
                    case.name,
                    case.expectations.len(),
                    sources
                );
            }
            println!("{} cases", cases.len());
            Ok(())
        }
    }
}
