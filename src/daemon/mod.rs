//! Daemon process management and directory-scoped sessions

mod controller;
mod session;

pub use controller::{DaemonController, JOBS_DONE_MARKER, READY_MARKER};
pub use session::DirectorySession;
