//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::pomodoro::{format_minutes, SessionKind};
use crate::tui::app::{App, HELP};

const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Focus => Color::Red,
        SessionKind::ShortBreak => Color::Green,
        SessionKind::LongBreak => Color::Blue,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: kinds, countdown, progress, footer, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Session kinds
            Constraint::Min(5),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_kinds(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the session kind selector, highlighting the active kind.
fn render_kinds(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let current = app.timer.kind();
    let mut spans = Vec::new();

    for (i, kind) in SessionKind::ALL.iter().enumerate() {
        let text = format!(" {} {} ", i + 1, kind.label());
        let style = if *kind == current {
            Style::default()
                .fg(Color::Black)
                .bg(kind_color(*kind))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
    }

    let kinds = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" zentimer "),
        );

    frame.render_widget(kinds, area);
}

fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let color = kind_color(app.timer.kind());
    let lines = vec![
        Line::from(Span::styled(
            app.timer.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.timer.display(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.timer.progress().clamp(0.0, 1.0);
    let total = app.timer.settings().duration_for(app.timer.kind());

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(kind_color(app.timer.kind())))
        .ratio(progress)
        .label(format_minutes(total));

    frame.render_widget(gauge, area);
}

/// Render the play/pause indicator and cycle position.
fn render_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (indicator, color) = if app.timer.is_running() {
        ("▶ Running", Color::Green)
    } else {
        ("⏸ Paused", Color::Yellow)
    };
    let (position, every) = app.cycle_position();

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(indicator, Style::default().fg(color)),
        Span::raw(format!(
            "   Session {position} of {every}   Completed: {}",
            app.timer.sessions_completed()
        )),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
