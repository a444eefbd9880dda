//! Output formatting for zentimer.
//!
//! This module provides formatters for displaying settings, history and
//! stats in various formats.

mod json;
mod pretty;

use crate::api::{DailyStats, SessionRecord};
use crate::cli::args::OutputFormat;
use crate::error::ZenError;
use crate::pomodoro::Settings;

pub use json::*;
pub use pretty::*;

/// Format timer settings based on output format
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn format_settings(settings: &Settings, format: OutputFormat) -> Result<String, ZenError> {
    match format {
        OutputFormat::Pretty => Ok(format_settings_pretty(settings)),
        OutputFormat::Json => format_settings_json(settings),
    }
}

/// Format session history based on output format
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn format_history(sessions: &[SessionRecord], format: OutputFormat) -> Result<String, ZenError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions)),
        OutputFormat::Json => format_history_json(sessions),
    }
}

/// Format daily totals based on output format
///
/// # Errors
///
/// Returns `ZenError::Parse` if JSON serialization fails.
pub fn format_stats(stats: &DailyStats, format: OutputFormat) -> Result<String, ZenError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats)),
        OutputFormat::Json => format_stats_json(stats),
    }
}
