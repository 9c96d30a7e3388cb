//! Single-unit query execution and verification

use std::path::{Path, PathBuf};

use crate::client;
use crate::common::config::HarnessConfig;
use crate::common::{Error, Result};
use crate::corpus::descriptor::substitute;
use crate::location::{parse_output, Location};

/// One (query, expected-locations) pair bound to its test directory
///
/// Units for a directory are materialized up front and run in order while
/// the directory's daemon session is alive.
#[derive(Debug, Clone)]
pub struct VerificationUnit {
    /// Case name the unit belongs to
    pub case: String,
    /// Position within the case's descriptor
    pub index: usize,
    /// Absolute test directory substituted into templates
    pub dir: PathBuf,
    /// Query client argument template
    pub rc_command: Vec<String>,
    /// Expected location-string templates
    pub expected: Vec<String>,
}

impl VerificationUnit {
    pub fn label(&self) -> String {
        format!("{}:{}", self.case, self.index)
    }
}

/// Run one unit: substitute the directory into the query template, invoke
/// the client, parse its output against `project_dir`, and verify.
pub async fn run_unit(
    config: &HarnessConfig,
    project_dir: &Path,
    unit: &VerificationUnit,
) -> Result<()> {
    let dir = unit.dir.display().to_string();
    let args: Vec<String> = unit
        .rc_command
        .iter()
        .map(|arg| substitute(arg, &dir))
        .collect();

    let stdout = client::run(config, &args).await?;
    let actual = parse_output(project_dir, &stdout)?;

    let expected = unit
        .expected
        .iter()
        .map(|template| substitute(template, &dir).parse::<Location>())
        .collect::<Result<Vec<_>>>()?;

    verify(&actual, &expected)
}

/// Count check plus per-expected membership
///
/// Deliberately not a multiset comparison: duplicate actual entries that
/// keep the count and cover every expected location pass. Pinned by
/// `test_duplicate_expectations_pass_on_presence` below.
pub fn verify(actual: &[Location], expected: &[Location]) -> Result<()> {
    if actual.len() != expected.len() {
        return Err(Error::CountMismatch {
            expected: expected.len(),
            actual: actual.len(),
            found: join(actual),
        });
    }
    for location in expected {
        if !actual.contains(location) {
            return Err(Error::MissingLocation {
                expected: location.to_string(),
                found: join(actual),
            });
        }
    }
    Ok(())
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(file: &str, line: u32, col: u32) -> Location {
        Location::new(file, line, col)
    }

    #[test]
    fn test_matching_sets_verify() {
        let actual = vec![loc("/r/a.cpp", 1, 1), loc("/r/b.cpp", 2, 2)];
        let expected = vec![loc("/r/b.cpp", 2, 2), loc("/r/a.cpp", 1, 1)];
        verify(&actual, &expected).unwrap();
    }

    #[test]
    fn test_count_mismatch_is_reported() {
        let actual = vec![loc("/r/a.cpp", 1, 1)];
        let expected = vec![loc("/r/a.cpp", 1, 1), loc("/r/b.cpp", 2, 2)];
        let err = verify(&actual, &expected).unwrap_err();
        assert!(matches!(
            err,
            Error::CountMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_location_is_reported() {
        let actual = vec![loc("/r/a.cpp", 1, 1)];
        let expected = vec![loc("/r/a.cpp", 9, 9)];
        let err = verify(&actual, &expected).unwrap_err();
        assert!(matches!(err, Error::MissingLocation { .. }));
    }

    // The comparison is presence-based, not a one-to-one multiset match:
    // expecting the same location twice passes as long as the counts line
    // up and each expected entry exists somewhere in the actuals. This
    // pins the current behavior rather than endorsing it.
    #[test]
    fn test_duplicate_expectations_pass_on_presence() {
        let a = loc("/r/a.cpp", 1, 1);
        let b = loc("/r/b.cpp", 2, 2);
        let actual = vec![a.clone(), b];
        let expected = vec![a.clone(), a];
        verify(&actual, &expected).unwrap();
    }

    #[test]
    fn test_empty_sets_verify() {
        verify(&[], &[]).unwrap();
    }
}
