//! Suite orchestration
//!
//! One directory at a time, one daemon per directory. Directories run
//! strictly sequentially because every daemon binds the same socket and
//! state-file paths. Within a directory the units run in descriptor order
//! and a failed unit does not skip the rest.

mod query;
mod report;

pub use query::{run_unit, verify, VerificationUnit};
pub use report::{SuiteReport, UnitOutcome};

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::common::config::HarnessConfig;
use crate::common::Result;
use crate::corpus::{self, TestCase};
use crate::daemon::DirectorySession;

/// Materialize every unit of a case up front, in descriptor order
///
/// The full list exists before the first query runs, so session cleanup
/// never depends on a consumer draining a lazy sequence.
pub fn units_for(case: &TestCase) -> Vec<VerificationUnit> {
    case.expectations
        .iter()
        .enumerate()
        .map(|(index, expectation)| VerificationUnit {
            case: case.name.clone(),
            index,
            dir: case.dir.clone(),
            rc_command: expectation.rc_command.clone(),
            expected: expectation.expectation.clone(),
        })
        .collect()
}

/// Run every discovered case under `corpus_root`, optionally filtered by
/// case-name substring
pub async fn run_suite(
    config: &HarnessConfig,
    corpus_root: &Path,
    filter: Option<&str>,
) -> Result<SuiteReport> {
    let cases = corpus::discover(corpus_root)?;
    let project_dir = project_dir_of(corpus_root)?;

    let mut report = SuiteReport::default();
    for case in &cases {
        if let Some(filter) = filter {
            if !case.name.contains(filter) {
                continue;
            }
        }
        run_case(config, &project_dir, case, &mut report).await;
    }
    Ok(report)
}

/// Locations in client output are relative to the directory above the
/// corpus root, the project the indexed sources belong to.
fn project_dir_of(corpus_root: &Path) -> Result<PathBuf> {
    let root = corpus_root
        .canonicalize()
        .map_err(|_| crate::common::Error::CorpusRoot(corpus_root.to_path_buf()))?;
    Ok(root.parent().unwrap_or(&root).to_path_buf())
}

async fn run_case(
    config: &HarnessConfig,
    project_dir: &Path,
    case: &TestCase,
    report: &mut SuiteReport,
) {
    println!("\n{} {}", "Case:".blue().bold(), case.name.white().bold());

    let session = match DirectorySession::start(config, case).await {
        Ok(session) => session,
        Err(e) => {
            // A setup failure fails the whole directory before any unit runs.
            println!("  {} session setup failed: {}", "✗".red(), e);
            report.record(UnitOutcome {
                case: case.name.clone(),
                unit: 0,
                error: Some(e),
            });
            return;
        }
    };

    for unit in units_for(case) {
        match run_unit(config, project_dir, &unit).await {
            Ok(()) => {
                println!("  {} {}", "✓".green(), unit.label().dimmed());
                report.record(UnitOutcome {
                    case: unit.case,
                    unit: unit.index,
                    error: None,
                });
            }
            Err(e) => {
                println!("  {} {}: {}", "✗".red(), unit.label(), e);
                report.record(UnitOutcome {
                    case: unit.case,
                    unit: unit.index,
                    error: Some(e),
                });
            }
        }
    }

    if let Err(e) = session.shutdown(config).await {
        tracing::warn!(case = %case.name, error = %e, "daemon shutdown failed");
    }
}
