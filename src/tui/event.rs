//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ZenError;
use crate::pomodoro::SessionKind;
use crate::tui::app::Action;

/// How long to wait for input while the timer is paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Wait for a key press, at most until the next tick is due.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(next_tick: Option<Duration>) -> Result<Option<Action>, ZenError> {
    let timeout = next_tick.map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

    if event::poll(timeout).map_err(|e| ZenError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| ZenError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key));
            }
        }
    }

    Ok(None)
}

/// Map a key press to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('s') => Some(Action::Skip),
        KeyCode::Char('1') => Some(Action::Select(SessionKind::Focus)),
        KeyCode::Char('2') => Some(Action::Select(SessionKind::ShortBreak)),
        KeyCode::Char('3') => Some(Action::Select(SessionKind::LongBreak)),
        KeyCode::Char('L') => Some(Action::Reload),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}
