//! Shared plumbing: errors, configuration, logging, platform paths

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
