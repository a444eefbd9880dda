//! Terminal User Interface (TUI) for zentimer.
//!
//! Full-screen countdown widget built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{Action, App};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::ZenError;
use crate::pomodoro::SessionTimer;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(timer: SessionTimer) -> Result<(), ZenError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| ZenError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| ZenError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ZenError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(timer);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), ZenError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| ZenError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app.timer.time_until_next_tick())? {
            app.apply(action);
        }
        if app.should_quit {
            break;
        }

        app.poll();
    }

    app.timer.pause();
    Ok(())
}
