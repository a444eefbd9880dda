//! JSON output formatting for zentimer.

use serde::Serialize;
use serde_json::json;

use crate::api::{DailyStats, SessionRecord};
use crate::error::ZenError;
use crate::pomodoro::Settings;

/// Format settings as JSON.
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn format_settings_json(settings: &Settings) -> Result<String, ZenError> {
    to_json(settings)
}

/// Format session history as JSON.
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn format_history_json(sessions: &[SessionRecord]) -> Result<String, ZenError> {
    let focus_minutes: u32 = sessions
        .iter()
        .filter(|s| !s.session_type.is_break())
        .map(|s| s.duration_minutes)
        .sum();

    let output = json!({
        "count": sessions.len(),
        "focus_minutes": focus_minutes,
        "items": sessions,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format daily stats as JSON.
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn format_stats_json(stats: &DailyStats) -> Result<String, ZenError> {
    to_json(stats)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ZenError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Single-line JSON, for streams of events.
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, ZenError> {
    Ok(serde_json::to_string(value)?)
}
