//! Session kinds, timer settings and state snapshots.

use serde::{Deserialize, Serialize};

use crate::error::ZenError;

/// Kind of session the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Work interval
    Focus,
    /// Rest between focus sessions
    ShortBreak,
    /// Rest after every N focus sessions
    LongBreak,
}

impl SessionKind {
    /// All kinds, in the order they are shown to the user.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Parse a session kind from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "f" | "pomodoro" | "pomo" => Some(Self::Focus),
            "short_break" | "short-break" | "short" | "sb" => Some(Self::ShortBreak),
            "long_break" | "long-break" | "long" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Wire name, as sent to the session log.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }

    /// Human-readable label shown above the countdown.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus Time",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Notification body sent when a session of this kind completes.
    #[must_use]
    pub const fn completion_message(&self) -> &'static str {
        match self {
            Self::Focus => "Focus session complete! Time for a break.",
            Self::ShortBreak => "Break is over! Ready to focus?",
            Self::LongBreak => "Long break is over! Ready to focus?",
        }
    }

    /// Check if this is a break kind.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Timer settings, as stored by the settings backend.
///
/// Durations are in minutes. Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub focus_duration: u32,
    pub short_break_duration: u32,
    pub long_break_duration: u32,
    /// Number of focus sessions before a long break.
    pub sessions_until_long_break: u32,
    /// Start the break countdown as soon as a focus session ends.
    pub auto_start_breaks: bool,
    /// Start the next focus countdown as soon as a break ends.
    pub auto_start_focus: bool,
    /// Play an audible cue when a session completes.
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            sessions_until_long_break: 4,
            auto_start_breaks: false,
            auto_start_focus: false,
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Configured duration for a session kind, in minutes.
    #[must_use]
    pub const fn duration_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Focus => self.focus_duration,
            SessionKind::ShortBreak => self.short_break_duration,
            SessionKind::LongBreak => self.long_break_duration,
        }
    }

    /// Configured duration for a session kind, in seconds.
    #[must_use]
    pub const fn seconds_for(&self, kind: SessionKind) -> u32 {
        self.duration_for(kind).saturating_mul(60)
    }

    /// Check that every duration and the long-break interval are positive.
    ///
    /// # Errors
    ///
    /// Returns `ZenError::InvalidSettings` naming the first offending field.
    pub fn validate(&self) -> Result<(), ZenError> {
        let fields = [
            ("focus_duration", self.focus_duration),
            ("short_break_duration", self.short_break_duration),
            ("long_break_duration", self.long_break_duration),
            ("sessions_until_long_break", self.sessions_until_long_break),
        ];

        for (name, value) in fields {
            if value == 0 {
                return Err(ZenError::InvalidSettings(format!(
                    "{name} must be a positive integer"
                )));
            }
        }

        Ok(())
    }
}

/// Snapshot of the timer's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub kind: SessionKind,
    pub seconds_remaining: u32,
    pub running: bool,
    pub sessions_completed: u32,
}

/// Outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Kind of the session that just ended
    pub finished: SessionKind,
    /// Kind the timer moved to
    pub next: SessionKind,
    /// Completed focus sessions so far
    pub sessions_completed: u32,
    /// Whether the session was recorded by the backend (focus only)
    pub logged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.focus_duration, 25);
        assert_eq!(settings.short_break_duration, 5);
        assert_eq!(settings.long_break_duration, 15);
        assert_eq!(settings.sessions_until_long_break, 4);
        assert!(settings.sound_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_duration_for() {
        let settings = Settings::default();
        assert_eq!(settings.duration_for(SessionKind::Focus), 25);
        assert_eq!(settings.duration_for(SessionKind::ShortBreak), 5);
        assert_eq!(settings.seconds_for(SessionKind::LongBreak), 900);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let settings = Settings {
            sessions_until_long_break: 0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("sessions_until_long_break"));

        let settings = Settings {
            short_break_duration: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_wire_format() {
        let json = r#"{
            "focus_duration": 50,
            "short_break_duration": 10,
            "long_break_duration": 30,
            "sessions_until_long_break": 3
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.focus_duration, 50);
        assert!(!settings.auto_start_breaks);
        assert!(settings.sound_enabled);

        let value = serde_json::to_value(&Settings::default()).unwrap();
        assert_eq!(value["sessions_until_long_break"], 4);
        assert_eq!(value["auto_start_focus"], false);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(SessionKind::parse("focus"), Some(SessionKind::Focus));
        assert_eq!(SessionKind::parse("Short"), Some(SessionKind::ShortBreak));
        assert_eq!(SessionKind::parse("long_break"), Some(SessionKind::LongBreak));
        assert_eq!(SessionKind::parse("nap"), None);
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&SessionKind::ShortBreak).unwrap(),
            "\"short_break\""
        );
        let kind: SessionKind = serde_json::from_str("\"long_break\"").unwrap();
        assert_eq!(kind, SessionKind::LongBreak);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SessionKind::Focus.label(), "Focus Time");
        assert_eq!(SessionKind::ShortBreak.label(), "Short Break");
        assert!(SessionKind::LongBreak.is_break());
        assert!(!SessionKind::Focus.is_break());
    }
}
