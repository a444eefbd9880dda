//! Database migrations for zentimer.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::ZenError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, ZenError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| ZenError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), ZenError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| ZenError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), ZenError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), ZenError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(ZenError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `pomodoro_settings`: the single settings record
/// - `pomodoro_sessions`: the session log
/// - `daily_stats`: per-day pomodoro count and focus minutes
fn migrate_v1(conn: &Connection) -> Result<(), ZenError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS pomodoro_settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            focus_duration INTEGER NOT NULL DEFAULT 25,
            short_break_duration INTEGER NOT NULL DEFAULT 5,
            long_break_duration INTEGER NOT NULL DEFAULT 15,
            sessions_until_long_break INTEGER NOT NULL DEFAULT 4,
            auto_start_breaks INTEGER NOT NULL DEFAULT 0,
            auto_start_focus INTEGER NOT NULL DEFAULT 0,
            sound_enabled INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS pomodoro_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_type TEXT NOT NULL DEFAULT 'focus',
            duration_minutes INTEGER NOT NULL,
            notes TEXT,
            completed_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_pomodoro_sessions_completed
        ON pomodoro_sessions(completed_at);

        CREATE TABLE IF NOT EXISTS daily_stats (
            date TEXT PRIMARY KEY,
            pomodoro_count INTEGER NOT NULL DEFAULT 0,
            focus_minutes INTEGER NOT NULL DEFAULT 0
        );
        ",
    )
    .map_err(|e| ZenError::Database(format!("Migration v1 failed: {e}")))
}
