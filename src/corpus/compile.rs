//! Compile-command construction
//!
//! One registration command per `.cpp` file in a test directory. The
//! command string is what the daemon stores in its index, so it uses the
//! exact shape the real build would: `<compiler> -std=c++11 -I. -c <path>`.

use std::path::{Path, PathBuf};

/// One registration command for the daemon's index
#[derive(Debug, Clone)]
pub struct CompileCommand {
    /// Directory owning the source file
    pub directory: PathBuf,
    /// Source file name within the directory
    pub file: String,
    /// Full compiler invocation registered with the daemon
    pub command: String,
}

/// Build one command per `.cpp` file, in the order the files were listed
pub fn compile_commands(dir: &Path, files: &[String], compiler: &str) -> Vec<CompileCommand> {
    files
        .iter()
        .filter(|file| file.ends_with(".cpp"))
        .map(|file| CompileCommand {
            directory: dir.to_path_buf(),
            file: file.clone(),
            command: format!(
                "{} -std=c++11 -I. -c {}",
                compiler,
                dir.join(file).display()
            ),
        })
        .collect()
}
