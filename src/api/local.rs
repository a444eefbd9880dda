//! Local backend on the `SQLite` database.
//!
//! Mirrors the remote server: a missing settings row reads as the defaults,
//! and every logged session also updates the day's totals.

use chrono::{DateTime, Local, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use serde::Serialize;

use super::{SessionApi, SessionLog, SessionRecord};
use crate::error::ZenError;
use crate::pomodoro::{SessionKind, Settings};
use crate::storage::Database;

/// Pomodoro totals for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub pomodoro_count: u32,
    pub focus_minutes: u32,
}

impl DailyStats {
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            pomodoro_count: 0,
            focus_minutes: 0,
        }
    }
}

/// Settings and session log stored in the local database.
pub struct LocalApi {
    db: Database,
}

impl LocalApi {
    /// Open the database at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, ZenError> {
        Ok(Self::with_database(Database::open()?))
    }

    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Record a session as completed at `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the stats update fails.
    pub fn record_session(&self, entry: &SessionLog, at: DateTime<Local>) -> Result<(), ZenError> {
        // The session row and the day's totals land together or not at all.
        let tx = self
            .db
            .connection()
            .unchecked_transaction()
            .map_err(|e| ZenError::Database(format!("Failed to begin transaction: {e}")))?;

        tx.execute(
            r"INSERT INTO pomodoro_sessions (session_type, duration_minutes, notes, completed_at)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.session_type.as_str(),
                entry.duration_minutes,
                entry.notes,
                at.with_timezone(&Utc).to_rfc3339(),
            ],
        )
        .map_err(|e| ZenError::Database(format!("Failed to insert session: {e}")))?;

        let is_focus = entry.session_type == SessionKind::Focus;
        let (count, minutes) = if is_focus {
            (1u32, entry.duration_minutes)
        } else {
            (0, 0)
        };

        // Non-focus sessions only make sure the day has a row.
        tx.execute(
            r"INSERT INTO daily_stats (date, pomodoro_count, focus_minutes)
              VALUES (?1, ?2, ?3)
              ON CONFLICT(date) DO UPDATE SET
                  pomodoro_count = pomodoro_count + excluded.pomodoro_count,
                  focus_minutes = focus_minutes + excluded.focus_minutes",
            params![date_key(at.date_naive()), count, minutes],
        )
        .map_err(|e| ZenError::Database(format!("Failed to update daily stats: {e}")))?;

        tx.commit()
            .map_err(|e| ZenError::Database(format!("Failed to commit session: {e}")))
    }

    /// Totals for a given day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn daily_stats(&self, date: NaiveDate) -> Result<DailyStats, ZenError> {
        let conn = self.db.connection();

        let row = conn
            .query_row(
                "SELECT pomodoro_count, focus_minutes FROM daily_stats WHERE date = ?1",
                [date_key(date)],
                |row| Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?)),
            )
            .optional()
            .map_err(|e| ZenError::Database(format!("Failed to query daily stats: {e}")))?;

        Ok(row.map_or_else(
            || DailyStats::empty(date),
            |(pomodoro_count, focus_minutes)| DailyStats {
                date,
                pomodoro_count,
                focus_minutes,
            },
        ))
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn row_to_settings(row: &Row<'_>) -> rusqlite::Result<Settings> {
    Ok(Settings {
        focus_duration: row.get(0)?,
        short_break_duration: row.get(1)?,
        long_break_duration: row.get(2)?,
        sessions_until_long_break: row.get(3)?,
        auto_start_breaks: row.get(4)?,
        auto_start_focus: row.get(5)?,
        sound_enabled: row.get(6)?,
    })
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<SessionRecord> {
    let session_type: String = row.get(1)?;
    let session_type = SessionKind::parse(&session_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown session type: {session_type}").into(),
        )
    })?;

    Ok(SessionRecord {
        id: row.get(0)?,
        session_type,
        duration_minutes: row.get(2)?,
        notes: row.get(3)?,
        completed_at: row.get(4)?,
    })
}

impl SessionApi for LocalApi {
    fn fetch_settings(&self) -> Result<Settings, ZenError> {
        let conn = self.db.connection();

        let settings = conn
            .query_row(
                r"SELECT focus_duration, short_break_duration, long_break_duration,
                         sessions_until_long_break, auto_start_breaks, auto_start_focus,
                         sound_enabled
                  FROM pomodoro_settings WHERE id = 1",
                [],
                row_to_settings,
            )
            .optional()
            .map_err(|e| ZenError::Database(format!("Failed to query settings: {e}")))?;

        Ok(settings.unwrap_or_default())
    }

    fn store_settings(&self, settings: &Settings) -> Result<(), ZenError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO pomodoro_settings
                  (id, focus_duration, short_break_duration, long_break_duration,
                   sessions_until_long_break, auto_start_breaks, auto_start_focus, sound_enabled)
                  VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)
                  ON CONFLICT(id) DO UPDATE SET
                      focus_duration = excluded.focus_duration,
                      short_break_duration = excluded.short_break_duration,
                      long_break_duration = excluded.long_break_duration,
                      sessions_until_long_break = excluded.sessions_until_long_break,
                      auto_start_breaks = excluded.auto_start_breaks,
                      auto_start_focus = excluded.auto_start_focus,
                      sound_enabled = excluded.sound_enabled",
                params![
                    settings.focus_duration,
                    settings.short_break_duration,
                    settings.long_break_duration,
                    settings.sessions_until_long_break,
                    settings.auto_start_breaks,
                    settings.auto_start_focus,
                    settings.sound_enabled,
                ],
            )
            .map_err(|e| ZenError::Database(format!("Failed to store settings: {e}")))?;

        Ok(())
    }

    fn log_session(&self, entry: &SessionLog) -> Result<(), ZenError> {
        self.record_session(entry, Local::now())
    }

    fn recent_sessions(&self, limit: usize) -> Result<Vec<SessionRecord>, ZenError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, session_type, duration_minutes, notes, completed_at
                  FROM pomodoro_sessions
                  ORDER BY completed_at DESC, id DESC
                  LIMIT ?1",
            )
            .map_err(|e| ZenError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_record)
            .map_err(|e| ZenError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| ZenError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }

    fn today_stats(&self) -> Result<DailyStats, ZenError> {
        self.daily_stats(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn api() -> LocalApi {
        LocalApi::with_database(Database::open_in_memory().unwrap())
    }

    fn at(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_settings_read_as_defaults() {
        assert_eq!(api().fetch_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_store_and_fetch_settings() {
        let api = api();
        let settings = Settings {
            focus_duration: 45,
            sessions_until_long_break: 2,
            auto_start_breaks: true,
            sound_enabled: false,
            ..Settings::default()
        };

        api.store_settings(&settings).unwrap();
        assert_eq!(api.fetch_settings().unwrap(), settings);

        // Second store replaces the row rather than adding one.
        let updated = Settings {
            focus_duration: 30,
            ..settings
        };
        api.store_settings(&updated).unwrap();
        assert_eq!(api.fetch_settings().unwrap().focus_duration, 30);
    }

    #[test]
    fn test_focus_session_updates_daily_stats() {
        let api = api();
        let entry = SessionLog::new(SessionKind::Focus, 25);

        api.record_session(&entry, at(4, 9)).unwrap();
        api.record_session(&entry, at(4, 10)).unwrap();

        let stats = api.daily_stats(at(4, 0).date_naive()).unwrap();
        assert_eq!(stats.pomodoro_count, 2);
        assert_eq!(stats.focus_minutes, 50);
    }

    #[test]
    fn test_break_session_creates_empty_day() {
        let api = api();
        api.record_session(&SessionLog::new(SessionKind::ShortBreak, 5), at(5, 9))
            .unwrap();

        let stats = api.daily_stats(at(5, 0).date_naive()).unwrap();
        assert_eq!(stats, DailyStats::empty(at(5, 0).date_naive()));
        assert_eq!(api.recent_sessions(10).unwrap().len(), 1);
    }

    #[test]
    fn test_recent_sessions_newest_first() {
        let api = api();
        api.record_session(&SessionLog::new(SessionKind::Focus, 25), at(6, 9))
            .unwrap();
        api.record_session(
            &SessionLog::new(SessionKind::Focus, 50).with_notes(Some("deep work".to_string())),
            at(6, 11),
        )
        .unwrap();
        api.record_session(&SessionLog::new(SessionKind::LongBreak, 15), at(6, 10))
            .unwrap();

        let sessions = api.recent_sessions(2).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].duration_minutes, 50);
        assert_eq!(sessions[0].notes.as_deref(), Some("deep work"));
        assert_eq!(sessions[1].session_type, SessionKind::LongBreak);
    }

    #[test]
    fn test_failed_stats_write_drops_session() {
        let api = api();
        api.db
            .connection()
            .execute_batch("DROP TABLE daily_stats;")
            .unwrap();

        let result = api.record_session(&SessionLog::new(SessionKind::Focus, 25), at(7, 9));
        assert!(matches!(result, Err(ZenError::Database(_))));

        let rows: i64 = api
            .db
            .connection()
            .query_row("SELECT COUNT(*) FROM pomodoro_sessions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_daily_stats_unknown_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(api().daily_stats(date).unwrap(), DailyStats::empty(date));
    }
}
