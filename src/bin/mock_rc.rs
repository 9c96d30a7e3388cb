//! Mock query client binary for integration testing
//!
//! Registration invocations (`-c`) exit quietly. Query invocations locate
//! the test directory from their substituted arguments and print that
//! directory's `rc_output.txt` verbatim, mimicking the real client's
//! `path:line:col` output. A `--fail` argument forces a non-zero exit.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.iter().any(|arg| arg.starts_with("--socket-file=")) {
        eprintln!("mock-rc: missing --socket-file");
        return ExitCode::FAILURE;
    }

    if args.iter().any(|arg| arg == "-c") {
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|arg| arg == "--fail") {
        eprintln!("mock-rc: forced failure");
        return ExitCode::FAILURE;
    }

    match canned_output(&args) {
        Some(content) => {
            print!("{content}");
            ExitCode::SUCCESS
        }
        // No canned output found: an empty result set.
        None => ExitCode::SUCCESS,
    }
}

/// A substituted query argument carries `<test-dir>/<file>:<line>:<col>`;
/// the canned output lives next to that file as `rc_output.txt`.
fn canned_output(args: &[String]) -> Option<String> {
    for arg in args {
        let value = arg.split_once('=').map(|(_, v)| v).unwrap_or(arg);
        let path = Path::new(value.split(':').next().unwrap_or(value));
        let Some(dir) = path.parent() else { continue };
        let candidate = dir.join("rc_output.txt");
        if let Ok(content) = std::fs::read_to_string(&candidate) {
            return Some(content);
        }
    }
    None
}
