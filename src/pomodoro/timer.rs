//! The session timer state machine.
//!
//! A [`SessionTimer`] counts down the current session one second at a time
//! and, when the countdown runs out, moves through the focus/break cycle:
//! focus is followed by a short break, or by a long break after every
//! `sessions_until_long_break` focus sessions; every break is followed by
//! focus.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::alert::{Notifier, SoundPlayer, APP_NAME};
use super::clock::Clock;
use super::session::{Completion, SessionKind, SessionState, Settings};
use crate::api::{SessionApi, SessionLog};

const TICK: Duration = Duration::from_secs(1);

/// Everything the timer needs from the outside world.
pub struct Capabilities {
    pub api: Box<dyn SessionApi>,
    pub clock: Box<dyn Clock>,
    pub notifier: Box<dyn Notifier>,
    pub sound: Box<dyn SoundPlayer>,
}

/// Pomodoro countdown cycling through focus and break sessions.
pub struct SessionTimer {
    settings: Settings,
    kind: SessionKind,
    seconds_remaining: u32,
    running: bool,
    sessions_completed: u32,
    /// When the next one-second tick is due; `None` while paused.
    next_tick_at: Option<Instant>,
    caps: Capabilities,
}

impl SessionTimer {
    /// Create a paused timer at the start of a focus session.
    #[must_use]
    pub fn new(settings: Settings, caps: Capabilities) -> Self {
        let seconds_remaining = settings.seconds_for(SessionKind::Focus);
        Self {
            settings,
            kind: SessionKind::Focus,
            seconds_remaining,
            running: false,
            sessions_completed: 0,
            next_tick_at: None,
            caps,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Focus sessions completed since the timer was created.
    #[must_use]
    pub const fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        SessionState {
            kind: self.kind,
            seconds_remaining: self.seconds_remaining,
            running: self.running,
            sessions_completed: self.sessions_completed,
        }
    }

    /// Label for the current session kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_mmss(self.seconds_remaining)
    }

    /// Fraction of the current session already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.settings.seconds_for(self.kind);
        if total == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.seconds_remaining) / f64::from(total)
    }

    /// The backend this timer reports to.
    #[must_use]
    pub fn api(&self) -> &dyn SessionApi {
        self.caps.api.as_ref()
    }

    /// Start counting down. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.next_tick_at = Some(self.caps.clock.now() + TICK);
        debug!(kind = %self.kind, remaining = self.seconds_remaining, "Timer started");
    }

    /// Stop counting down. No-op if already paused.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.next_tick_at = None;
        debug!(kind = %self.kind, remaining = self.seconds_remaining, "Timer paused");
    }

    /// Pause when running, start otherwise.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Pause and restore the full duration of the current session.
    pub fn reset(&mut self) {
        self.pause();
        self.seconds_remaining = self.settings.seconds_for(self.kind);
    }

    /// Pause and complete the current session immediately.
    pub fn skip(&mut self) -> Completion {
        self.pause();
        self.complete_session()
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero completes the session; the countdown never goes below
    /// zero. Ignored while paused.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.running {
            return None;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);

        if self.seconds_remaining == 0 {
            Some(self.complete_session())
        } else {
            None
        }
    }

    /// Run every tick that has come due on the clock.
    ///
    /// Stops at the first completion, since completing pauses the timer
    /// (unless auto-start resumed it, in which case the next call carries on).
    pub fn poll(&mut self) -> Option<Completion> {
        let now = self.caps.clock.now();

        while let Some(due) = self.next_tick_at {
            if due > now {
                break;
            }
            self.next_tick_at = Some(due + TICK);

            if let Some(completion) = self.tick() {
                return Some(completion);
            }
        }

        None
    }

    /// How long until the next tick is due, or `None` while paused.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.next_tick_at
            .map(|due| due.saturating_duration_since(self.caps.clock.now()))
    }

    /// Block on the clock until the next tick, then run due ticks.
    ///
    /// Returns `None` straight away while paused.
    pub fn wait_and_poll(&mut self) -> Option<Completion> {
        let wait = self.time_until_next_tick()?;
        self.caps.clock.sleep(wait);
        self.poll()
    }

    /// End the current session and move to the next one.
    ///
    /// Alerts the user, logs completed focus sessions to the backend and
    /// applies the cycle policy. Backend and alert failures are logged and
    /// otherwise ignored.
    pub fn complete_session(&mut self) -> Completion {
        self.pause();

        let finished = self.kind;
        self.alert(finished);

        let mut logged = false;
        if finished == SessionKind::Focus {
            let entry = SessionLog::new(finished, self.settings.duration_for(finished));
            match self.caps.api.log_session(&entry) {
                Ok(()) => logged = true,
                Err(e) => error!(error = %e, "Failed to log session"),
            }
            self.sessions_completed += 1;
        }

        let next = self.next_kind();
        self.switch_to(next);

        info!(
            finished = %finished,
            next = %next,
            sessions_completed = self.sessions_completed,
            "Session complete"
        );

        let auto_start = if next.is_break() {
            self.settings.auto_start_breaks
        } else {
            self.settings.auto_start_focus
        };
        if auto_start {
            self.start();
        }

        Completion {
            finished,
            next,
            sessions_completed: self.sessions_completed,
            logged,
        }
    }

    /// Kind that follows the current one.
    fn next_kind(&self) -> SessionKind {
        match self.kind {
            SessionKind::Focus => {
                let every = self.settings.sessions_until_long_break;
                if every > 0 && self.sessions_completed > 0 && self.sessions_completed % every == 0
                {
                    SessionKind::LongBreak
                } else {
                    SessionKind::ShortBreak
                }
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => SessionKind::Focus,
        }
    }

    fn switch_to(&mut self, kind: SessionKind) {
        self.kind = kind;
        self.seconds_remaining = self.settings.seconds_for(kind);
    }

    fn alert(&self, finished: SessionKind) {
        if self.settings.sound_enabled {
            if let Err(e) = self.caps.sound.play() {
                debug!(error = %e, "Audio not supported");
            }
        }

        if let Err(e) = self
            .caps
            .notifier
            .notify(APP_NAME, finished.completion_message())
        {
            debug!(error = %e, "Notification not shown");
        }
    }

    /// Switch to a session kind by hand.
    ///
    /// Only allowed while paused; returns whether the switch happened.
    pub fn set_session_type(&mut self, kind: SessionKind) -> bool {
        if self.running {
            warn!(requested = %kind, "Cannot change session type while running");
            return false;
        }
        self.switch_to(kind);
        true
    }

    /// Replace the settings with the backend's copy.
    ///
    /// On failure the current settings are kept. Returns whether new settings
    /// were loaded.
    pub fn load_settings(&mut self) -> bool {
        let fetched = self
            .caps
            .api
            .fetch_settings()
            .and_then(|s| s.validate().map(|()| s));

        match fetched {
            Ok(settings) => {
                self.settings = settings;
                if !self.running {
                    self.seconds_remaining = self.settings.seconds_for(self.kind);
                }
                debug!(settings = ?self.settings, "Settings loaded");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load settings");
                false
            }
        }
    }

    /// Store new settings on the backend and adopt them.
    ///
    /// The timer is reset to the new duration only once the backend accepted
    /// the record; on failure the current settings are kept. Returns whether
    /// the settings were saved.
    pub fn save_settings(&mut self, settings: Settings) -> bool {
        if let Err(e) = settings.validate() {
            error!(error = %e, "Failed to save settings");
            return false;
        }

        match self.caps.api.store_settings(&settings) {
            Ok(()) => {
                self.settings = settings;
                self.reset();
                debug!(settings = ?self.settings, "Settings saved");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to save settings");
                false
            }
        }
    }
}

/// Format a number of seconds as `MM:SS`.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a number of minutes as a human-readable string.
#[must_use]
pub fn format_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let plural = |n: u32| if n == 1 { "" } else { "s" };

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
