//! `SQLite` store behind the local backend.
//!
//! Lives at `~/.zentimer/zentimer.db` and holds the settings record, the
//! session log and the per-day totals.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::ZenError;

use super::migrations;

/// How long a write waits on another zentimer process holding the file.
///
/// A running timer and a `zentimer log` in another shell share the database.
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// The local store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store under the zentimer home directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory or the database cannot be
    /// created, or the schema cannot be brought up to date.
    pub fn open() -> Result<Self, ZenError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot be
    /// brought up to date.
    pub fn open_at(path: &Path) -> Result<Self, ZenError> {
        let conn = Connection::open(path).map_err(|e| {
            ZenError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Self::prepare(conn)
    }

    /// Open a throwaway store.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, ZenError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            ZenError::Database(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::prepare(conn)
    }

    fn prepare(conn: Connection) -> Result<Self, ZenError> {
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| ZenError::Database(format!("Failed to set busy timeout: {e}")))?;
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Schema version recorded in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, ZenError> {
        migrations::get_version(&self.conn)
    }

    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
