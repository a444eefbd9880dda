//! Path resolution for zentimer configuration and data files.
//!
//! All zentimer data is stored in `~/.zentimer/`:
//! - `config.yaml` - Main configuration file
//! - `zentimer.db` - `SQLite` database for the local backend
//! - `zentimer.log` - Diagnostic log written while the TUI owns the terminal

use std::path::PathBuf;

use crate::error::ZenError;

/// Paths to zentimer configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.zentimer/`
    pub root: PathBuf,
    /// Config file: `~/.zentimer/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.zentimer/zentimer.db`
    pub database: PathBuf,
    /// Log file: `~/.zentimer/zentimer.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ZenError> {
        let home = std::env::var("HOME")
            .map_err(|_| ZenError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".zentimer")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("zentimer.db"),
            log_file: root.join("zentimer.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ZenError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ZenError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
