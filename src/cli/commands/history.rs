//! Session log commands: history, manual logging and daily totals.

use colored::Colorize;

use crate::api::{SessionApi, SessionLog};
use crate::cli::args::{LogArgs, OutputFormat};
use crate::error::ZenError;
use crate::output::{format_history, format_stats, to_json};
use crate::pomodoro::{format_minutes, SessionKind};

/// Show the most recent logged sessions.
///
/// # Errors
///
/// Returns an error if the backend cannot be read or output formatting fails.
pub fn history(api: &dyn SessionApi, limit: usize, format: OutputFormat) -> Result<String, ZenError> {
    let sessions = api.recent_sessions(limit)?;
    format_history(&sessions, format)
}

/// Record a session by hand.
///
/// # Errors
///
/// Returns an error if the backend rejects the entry.
pub fn log(api: &dyn SessionApi, args: LogArgs, format: OutputFormat) -> Result<String, ZenError> {
    let kind = SessionKind::from(args.kind);
    let entry = SessionLog::new(kind, args.minutes).with_notes(args.notes);
    api.log_session(&entry)?;

    match format {
        OutputFormat::Json => to_json(&entry),
        OutputFormat::Pretty => Ok(format!(
            "{} {}: {}",
            "Logged".green(),
            kind.label(),
            format_minutes(entry.duration_minutes)
        )),
    }
}

/// Show today's pomodoro count and focus minutes.
///
/// # Errors
///
/// Returns `ZenError::NotSupported` for backends without daily totals.
pub fn stats(api: &dyn SessionApi, format: OutputFormat) -> Result<String, ZenError> {
    let stats = api.today_stats()?;
    format_stats(&stats, format)
}
