//! Diagnostic logging.
//!
//! Everything goes through `tracing`. The subscriber writes to stderr, or to
//! a log file while the terminal UI owns the screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ZenError;

/// Environment variable that forces debug logging.
pub const DEBUG_ENV: &str = "ZENTIMER_DEBUG_LOG";

/// Build the log filter.
///
/// `ZENTIMER_DEBUG_LOG=1` wins, then `RUST_LOG`, then `default_level`.
#[must_use]
pub fn filter(default_level: &str) -> EnvFilter {
    let debug_enabled = std::env::var(DEBUG_ENV)
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);

    if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }
}

/// Install the global subscriber writing to stderr.
///
/// A subscriber that is already installed is left in place.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Install the global subscriber appending to `path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_to_file(default_level: &str, path: &Path) -> Result<(), ZenError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ZenError::Config(format!("Failed to open log file {}: {e}", path.display()))
        })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_to_file_creates_log() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("zentimer.log");

        init_to_file("info", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_to_file_bad_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("zentimer.log");

        assert!(init_to_file("info", &path).is_err());
    }
}
