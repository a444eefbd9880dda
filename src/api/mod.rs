//! Settings and session-log backends.
//!
//! The timer talks to a [`SessionApi`]. Two backends implement it:
//! - [`HttpApi`] - the remote `/pomodoro/api` endpoints
//! - [`LocalApi`] - the same contract on the local `SQLite` database

mod http;
mod local;

pub use http::HttpApi;
pub use local::{DailyStats, LocalApi};

use serde::{Deserialize, Serialize};

use crate::error::ZenError;
use crate::pomodoro::{SessionKind, Settings};

/// Number of sessions the remote history endpoint returns.
pub const HISTORY_LIMIT: usize = 20;

/// A completed session, as reported to the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub session_type: SessionKind,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionLog {
    #[must_use]
    pub const fn new(session_type: SessionKind, duration_minutes: u32) -> Self {
        Self {
            session_type,
            duration_minutes,
            notes: None,
        }
    }

    /// Attach notes to the entry.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }
}

/// A session read back from the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub session_type: SessionKind,
    pub duration_minutes: u32,
    #[serde(default)]
    pub notes: Option<String>,
    /// When the backend recorded the session, as the backend formats it
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Backend holding the settings record and the session log.
#[cfg_attr(test, mockall::automock)]
pub trait SessionApi {
    /// Fetch the current settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers garbage.
    fn fetch_settings(&self) -> Result<Settings, ZenError>;

    /// Replace the stored settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects or cannot store the record.
    fn store_settings(&self, settings: &Settings) -> Result<(), ZenError>;

    /// Append a completed session to the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry could not be recorded.
    fn log_session(&self, entry: &SessionLog) -> Result<(), ZenError>;

    /// Most recent logged sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn recent_sessions(&self, limit: usize) -> Result<Vec<SessionRecord>, ZenError>;

    /// Daily totals for today, if this backend tracks them.
    ///
    /// # Errors
    ///
    /// Returns `ZenError::NotSupported` for backends without daily stats.
    fn today_stats(&self) -> Result<DailyStats, ZenError> {
        Err(ZenError::NotSupported(
            "daily stats are only tracked by the local backend".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_log_wire_format() {
        let entry = SessionLog::new(SessionKind::Focus, 25);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["session_type"], "focus");
        assert_eq!(value["duration_minutes"], 25);
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_session_log_blank_notes_dropped() {
        let entry = SessionLog::new(SessionKind::Focus, 25).with_notes(Some("  ".to_string()));
        assert!(entry.notes.is_none());

        let entry = SessionLog::new(SessionKind::Focus, 25).with_notes(Some("draft".to_string()));
        assert_eq!(entry.notes.as_deref(), Some("draft"));
    }

    #[test]
    fn test_session_record_from_server_row() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "session_type": "focus",
            "duration_minutes": 25,
            "notes": "",
            "completed_at": "2024-05-01 09:30:00"
        }"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.session_type, SessionKind::Focus);
        assert_eq!(record.completed_at.as_deref(), Some("2024-05-01 09:30:00"));
    }
}
