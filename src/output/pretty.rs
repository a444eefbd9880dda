use colored::Colorize;

use crate::api::{DailyStats, SessionRecord};
use crate::pomodoro::{format_minutes, Completion, SessionKind, Settings};

fn on_off(value: bool) -> String {
    if value {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    }
}

/// Format timer settings.
pub fn format_settings_pretty(settings: &Settings) -> String {
    let mut output = Vec::new();
    output.push("⏱  Timer Settings".bold().to_string());
    output.push("─".repeat(40));
    output.push(format!(
        "Focus:              {}",
        format_minutes(settings.focus_duration)
    ));
    output.push(format!(
        "Short break:        {}",
        format_minutes(settings.short_break_duration)
    ));
    output.push(format!(
        "Long break:         {}",
        format_minutes(settings.long_break_duration)
    ));
    output.push(format!(
        "Long break every:   {} focus sessions",
        settings.sessions_until_long_break
    ));
    output.push(format!(
        "Auto-start breaks:  {}",
        on_off(settings.auto_start_breaks)
    ));
    output.push(format!(
        "Auto-start focus:   {}",
        on_off(settings.auto_start_focus)
    ));
    output.push(format!("Sound:              {}", on_off(settings.sound_enabled)));
    output.join("\n")
}

fn kind_short(kind: SessionKind) -> &'static str {
    match kind {
        SessionKind::Focus => "Focus",
        SessionKind::ShortBreak => "Break",
        SessionKind::LongBreak => "Long",
    }
}

/// Format session history as a table.
pub fn format_history_pretty(sessions: &[SessionRecord]) -> String {
    if sessions.is_empty() {
        return "No sessions logged yet.\n\nStart one with: zentimer run".to_string();
    }

    let mut output = Vec::new();
    output.push("📋 Session History".bold().to_string());
    output.push("═".repeat(60));
    output.push(format!(
        "{:<26} {:<6} {:>8}   {}",
        "Completed", "Type", "Duration", "Notes"
    ));
    output.push("─".repeat(60));

    for session in sessions {
        let completed = session.completed_at.as_deref().unwrap_or("-");
        let completed: String = completed.chars().take(25).collect();
        let notes = session
            .notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("-");

        output.push(format!(
            "{:<26} {:<6} {:>7}m   {}",
            completed,
            kind_short(session.session_type),
            session.duration_minutes,
            notes.dimmed()
        ));
    }

    let focus_minutes: u32 = sessions
        .iter()
        .filter(|s| s.session_type == SessionKind::Focus)
        .map(|s| s.duration_minutes)
        .sum();
    output.push("─".repeat(60));
    output.push(format!(
        "{} sessions, {} focused",
        sessions.len(),
        format_minutes(focus_minutes)
    ));

    output.join("\n")
}

/// Format today's totals.
pub fn format_stats_pretty(stats: &DailyStats) -> String {
    format!(
        "🍅 {}\n   Pomodoros:  {}\n   Focused:    {}",
        stats.date.format("%A, %B %-d").to_string().bold(),
        stats.pomodoro_count,
        format_minutes(stats.focus_minutes)
    )
}

/// Format a session completion for the foreground runner.
pub fn format_completion_pretty(completion: &Completion, next_minutes: u32) -> String {
    let headline = completion.finished.completion_message();
    let headline = if completion.finished.is_break() {
        headline.cyan()
    } else {
        headline.green()
    };

    let mut line = format!("✅ {headline}");
    if completion.finished == SessionKind::Focus {
        line.push_str(&format!(
            "  ({} completed)",
            completion.sessions_completed
        ));
        if !completion.logged {
            line.push_str(&format!("  {}", "not logged".yellow()));
        }
    }
    line.push_str(&format!(
        "\n   Next: {} ({})",
        completion.next.label(),
        format_minutes(next_minutes)
    ));
    line
}
