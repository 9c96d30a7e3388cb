//! `expectation.json` descriptor types
//!
//! Each test directory carries one descriptor: an array of query/expected
//! pairs. Strings may contain one `{}` placeholder that gets substituted
//! with the absolute test-directory path before use.

use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};

/// Descriptor file name looked up in every test directory
pub const DESCRIPTOR_FILE: &str = "expectation.json";

/// One query/expectation pair from a directory's descriptor
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    /// Query client argument template
    #[serde(rename = "rc-command")]
    pub rc_command: Vec<String>,

    /// Expected location-string templates
    pub expectation: Vec<String>,
}

/// Load a directory's descriptor. A missing or malformed file is an error;
/// a directory in the corpus is expected to be a test case.
pub fn load(dir: &Path) -> Result<Vec<Expectation>> {
    let path = dir.join(DESCRIPTOR_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| Error::Descriptor {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Descriptor {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Substitute the test-directory placeholder into a template string
pub fn substitute(template: &str, dir: &str) -> String {
    template.replace("{}", dir)
}
