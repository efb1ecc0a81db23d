//! File-backed tracing setup. The terminal belongs to the UI, so log lines
//! never go to stdout or stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("codenames")
        .join("codenames.log")
}

/// Open the log for this run, creating its directory. Each run starts
/// with an empty file.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Install the global subscriber. Returns the log file path, or `None` if
/// it could not be opened and logging stays off.
pub fn init() -> Option<PathBuf> {
    let path = default_log_path();
    let file = open_log_file(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
