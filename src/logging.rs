//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it only logs when given a file.
//! The one-shot `calc` command logs to stderr.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "USAGE_ALCHEMIST_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Open (append) the log file, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Send logs to `path`. Later calls are ignored if a subscriber is already set.
pub fn init_file(path: &Path) -> Result<(), Error> {
    let file = open_log_file(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Send logs to stderr.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
