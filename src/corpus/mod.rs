//! Test-corpus discovery
//!
//! Each immediate subdirectory of the corpus root is one test case. A
//! directory whose name carries the exclusion marker is skipped entirely,
//! descriptor or not.

pub mod compile;
pub mod descriptor;

pub use compile::{compile_commands, CompileCommand};
pub use descriptor::Expectation;

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// Directory-name marker for a known-unsupported daemon feature
pub const EXCLUSION_MARKER: &str = "ForwardDeclaration";

/// One discovered test directory with its loaded descriptor
#[derive(Debug)]
pub struct TestCase {
    /// Directory basename, used as the case name in reports
    pub name: String,
    /// Absolute test directory
    pub dir: PathBuf,
    /// File names found directly in the directory
    pub files: Vec<String>,
    /// Parsed `expectation.json`
    pub expectations: Vec<Expectation>,
}

/// Walk the immediate subdirectories of `root` in name order and load one
/// test case per directory. Hidden directories are ignored; excluded
/// directories are skipped with a log line.
pub fn discover(root: &Path) -> Result<Vec<TestCase>> {
    let root = root
        .canonicalize()
        .map_err(|_| Error::CorpusRoot(root.to_path_buf()))?;
    if !root.is_dir() {
        return Err(Error::CorpusRoot(root));
    }

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(&root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();

    let mut cases = Vec::new();
    for dir in dirs {
        let name = match dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if name.starts_with('.') {
            continue;
        }
        if name.contains(EXCLUSION_MARKER) {
            tracing::debug!(case = %name, "skipping excluded directory");
            continue;
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        files.sort();

        let expectations = descriptor::load(&dir)?;
        cases.push(TestCase {
            name,
            dir,
            files,
            expectations,
        });
    }

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_case(root: &Path, name: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("main.cpp"), "int main() { return 0; }\n").unwrap();
        fs::write(
            dir.join(descriptor::DESCRIPTOR_FILE),
            r#"[{"rc-command": ["--references", "{}/main.cpp:1:5"], "expectation": []}]"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_discover_finds_cases_in_name_order() {
        let root = tempfile::tempdir().unwrap();
        write_case(root.path(), "BTest");
        write_case(root.path(), "ATest");

        let cases = discover(root.path()).unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["ATest", "BTest"]);
        assert!(cases[0].files.contains(&"main.cpp".to_string()));
        assert_eq!(cases[0].expectations.len(), 1);
    }

    #[test]
    fn test_excluded_directory_is_skipped_despite_valid_descriptor() {
        let root = tempfile::tempdir().unwrap();
        write_case(root.path(), "ForwardDeclarationTest");
        write_case(root.path(), "ReferencesTest");

        let cases = discover(root.path()).unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["ReferencesTest"]);
    }

    #[test]
    fn test_marker_matches_anywhere_in_name() {
        let root = tempfile::tempdir().unwrap();
        write_case(root.path(), "NestedForwardDeclarationCase");

        let cases = discover(root.path()).unwrap();
        assert!(cases.is_empty());
    }

    #[test]
    fn test_directory_without_descriptor_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("Broken");
        fs::create_dir_all(&dir).unwrap();

        let err = discover(root.path()).unwrap_err();
        assert!(matches!(err, Error::Descriptor { .. }));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = discover(Path::new("/definitely/not/a/corpus/root")).unwrap_err();
        assert!(matches!(err, Error::CorpusRoot(_)));
    }

    #[test]
    fn test_plain_files_in_root_are_ignored() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("README"), "notes\n").unwrap();
        write_case(root.path(), "OnlyCase");

        let cases = discover(root.path()).unwrap();
        assert_eq!(cases.len(), 1);
    }
}
