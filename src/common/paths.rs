//! Platform defaults for the daemon's singleton resources
//!
//! Unix: socket at /var/tmp/rdm_dev, state under the home directory.
//! Windows: both live under the home directory; the compiler carries its
//! .exe suffix.

use std::path::PathBuf;

/// Default daemon binary name, resolved on PATH.
pub const DEFAULT_DAEMON: &str = "rdm";

/// Default query client binary name, resolved on PATH.
pub const DEFAULT_CLIENT: &str = "rc";

#[cfg(not(windows))]
pub const DEFAULT_COMPILER: &str = "clang++";

#[cfg(windows)]
pub const DEFAULT_COMPILER: &str = "clang++.exe";

/// Socket the daemon binds. Process-wide singleton: two daemons can never
/// share it, which is why test directories run strictly sequentially.
#[cfg(not(windows))]
pub fn socket_file() -> PathBuf {
    PathBuf::from("/var/tmp/rdm_dev")
}

#[cfg(windows)]
pub fn socket_file() -> PathBuf {
    home_dir().join("rdm")
}

/// State file handed to the daemon with `-d`. Singleton for the same
/// reason as the socket.
pub fn state_file() -> PathBuf {
    home_dir().join(".rtags_dev")
}

fn home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the path to the optional configuration file
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/index-harness/config.toml`
/// - macOS: `~/Library/Application Support/index-harness/config.toml`
/// - Windows: `%APPDATA%\index-harness\config.toml`
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "index-harness")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_file_is_valid() {
        let path = socket_file();
        assert!(!path.as_os_str().is_empty());
    }

    #[test]
    fn test_state_file_is_under_home() {
        let path = state_file();
        assert!(path.ends_with(".rtags_dev"));
    }
}
