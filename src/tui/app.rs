//! Application state for the TUI.

use crate::pomodoro::{Completion, SessionKind, SessionTimer};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Restart the current session.
    Reset,
    /// Jump to the next session.
    Skip,
    /// Switch to a session kind (while paused).
    Select(SessionKind),
    /// Reload settings from the backend.
    Reload,
    /// Show the key help.
    Help,
}

pub const HELP: &str = "Space:start/pause | r:reset | s:skip | 1/2/3:type | L:reload | q:quit";

/// Application state.
pub struct App {
    pub timer: SessionTimer,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(timer: SessionTimer) -> Self {
        Self {
            timer,
            status: Some("Press Space to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle => {
                self.timer.toggle();
                self.status = None;
            }
            Action::Reset => {
                self.timer.reset();
                self.status = Some(format!("{} reset", self.timer.label()));
            }
            Action::Skip => {
                let completion = self.timer.skip();
                self.on_completion(&completion);
            }
            Action::Select(kind) => {
                self.status = if self.timer.set_session_type(kind) {
                    None
                } else {
                    Some("Pause the timer to change session type".to_string())
                };
            }
            Action::Reload => {
                self.status = Some(if self.timer.load_settings() {
                    "Settings reloaded".to_string()
                } else {
                    "Could not load settings, keeping current ones".to_string()
                });
            }
            Action::Help => self.status = Some(HELP.to_string()),
        }
    }

    /// Run due ticks and report a completion, if any.
    pub fn poll(&mut self) {
        if let Some(completion) = self.timer.poll() {
            self.on_completion(&completion);
        }
    }

    fn on_completion(&mut self, completion: &Completion) {
        let mut status = completion.finished.completion_message().to_string();
        if completion.finished == SessionKind::Focus && !completion.logged {
            status.push_str(" (not logged)");
        }
        self.status = Some(status);
    }

    /// Position of the current focus session in the cycle, starting at 1.
    pub const fn cycle_position(&self) -> (u32, u32) {
        let every = self.timer.settings().sessions_until_long_break;
        if every == 0 {
            return (1, 1);
        }
        (self.timer.sessions_completed() % every + 1, every)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSessionApi;
    use crate::error::ZenError;
    use crate::pomodoro::{Capabilities, ManualClock, NullNotifier, Settings, Silent};

    fn app_with(api: MockSessionApi, clock: &ManualClock) -> App {
        let timer = SessionTimer::new(
            Settings::default(),
            Capabilities {
                api: Box::new(api),
                clock: Box::new(clock.clone()),
                notifier: Box::new(NullNotifier),
                sound: Box::new(Silent),
            },
        );
        App::new(timer)
    }

    #[test]
    fn test_toggle_and_poll() {
        let clock = ManualClock::new();
        let mut app = app_with(MockSessionApi::new(), &clock);

        app.apply(Action::Toggle);
        assert!(app.timer.is_running());

        clock.advance_secs(3);
        app.poll();
        assert_eq!(app.timer.display(), "24:57");
    }

    #[test]
    fn test_select_rejected_while_running() {
        let clock = ManualClock::new();
        let mut app = app_with(MockSessionApi::new(), &clock);

        app.apply(Action::Toggle);
        app.apply(Action::Select(SessionKind::LongBreak));
        assert_eq!(app.timer.kind(), SessionKind::Focus);
        assert!(app.status.unwrap().contains("Pause the timer"));
    }

    #[test]
    fn test_skip_reports_unlogged_focus() {
        let mut api = MockSessionApi::new();
        api.expect_log_session()
            .returning(|_| Err(ZenError::Http("offline".to_string())));
        let clock = ManualClock::new();
        let mut app = app_with(api, &clock);

        app.apply(Action::Skip);
        assert_eq!(app.timer.kind(), SessionKind::ShortBreak);
        assert!(app.status.as_deref().unwrap().ends_with("(not logged)"));
        assert_eq!(app.cycle_position(), (2, 4));
    }

    #[test]
    fn test_reload_failure_keeps_settings() {
        let mut api = MockSessionApi::new();
        api.expect_fetch_settings()
            .returning(|| Err(ZenError::Http("offline".to_string())));
        let clock = ManualClock::new();
        let mut app = app_with(api, &clock);

        app.apply(Action::Reload);
        assert_eq!(app.timer.settings(), &Settings::default());
        assert!(app.status.unwrap().contains("keeping current"));
    }

    #[test]
    fn test_quit() {
        let clock = ManualClock::new();
        let mut app = app_with(MockSessionApi::new(), &clock);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
