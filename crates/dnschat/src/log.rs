//! Debug log file for `--verbose` runs.
use std::fs::{self, OpenOptions};
use std::io::{self, LineWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use dnschat_core::get_data_dir;
use tracing_subscriber::fmt::time::OffsetTime;

const LOG_FILE: &str = "dnschat.log";
const MAX_LOG_SIZE: u64 = 100 * 1024;
const LOG_FILTER: &str = "dnschat=debug,dnschat_core=debug,rustyline=info";

/// Moves `log_path` to `<log_path>.old` once it grows past `max_size`.
///
/// Returns the backup path when a rotation happened.
fn rotate_log(log_path: &Path, max_size: u64) -> io::Result<Option<PathBuf>> {
    let size = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    if size <= max_size {
        return Ok(None);
    }

    let mut backup = log_path.as_os_str().to_owned();
    backup.push(".old");
    let backup = PathBuf::from(backup);
    // rename does not replace an existing file on every platform
    if backup.exists() {
        fs::remove_file(&backup)?;
    }
    fs::rename(log_path, &backup)?;
    Ok(Some(backup))
}

/// Sends tracing output to `<data_dir>/dnschat.log`, keeping the terminal
/// for the chat itself.
pub fn setup_logging() -> Result<()> {
    let log_path = get_data_dir()
        .context("Failed to get data directory")?
        .join(LOG_FILE);
    rotate_log(&log_path, MAX_LOG_SIZE).context("Failed to rotate log file")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(LOG_FILTER)
        .with_writer(Mutex::new(LineWriter::new(log_file)))
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .init();
    Ok(())
}
