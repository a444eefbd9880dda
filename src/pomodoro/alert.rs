//! Completion alerts: desktop notifications and audible cues.
//!
//! Both are best effort. The timer logs failures and carries on.

use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use notify_rust::Notification;
use tracing::debug;

use crate::error::ZenError;

/// Application name shown on notifications.
pub const APP_NAME: &str = "zentimer";

/// Sends a user-visible notification when a session completes.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Ask for permission to show notifications.
    ///
    /// Returns whether notifications are expected to be shown.
    fn request_permission(&self) -> bool {
        true
    }

    /// Show a notification.
    ///
    /// # Errors
    ///
    /// Returns `ZenError::Notification` if the platform refused it.
    fn notify(&self, title: &str, body: &str) -> Result<(), ZenError>;
}

/// Plays the audible cue when a session completes.
#[cfg_attr(test, mockall::automock)]
pub trait SoundPlayer {
    /// Play the cue without blocking for its duration.
    ///
    /// # Errors
    ///
    /// Returns `ZenError::Audio` if no output was available.
    fn play(&self) -> Result<(), ZenError>;
}

/// Desktop notifications via the platform notification service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), ZenError> {
        Notification::new()
            .summary(title)
            .body(body)
            .appname(APP_NAME)
            .icon("alarm-clock")
            .show()
            .map(|_| ())
            .map_err(|e| ZenError::Notification(e.to_string()))
    }
}

/// Notifier that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn request_permission(&self) -> bool {
        false
    }

    fn notify(&self, _title: &str, _body: &str) -> Result<(), ZenError> {
        Ok(())
    }
}

/// Players tried in order, with the sound file each one is handed.
const SOUND_COMMANDS: [(&str, &str); 4] = [
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("afplay", "/System/Library/Sounds/Glass.aiff"),
    ("aplay", "/usr/share/sounds/sound-icons/guitar-11.wav"),
    ("aplay", "/usr/share/sounds/generic.wav"),
];

/// Plays a system sound through the first available player, falling back to
/// the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSound;

impl SoundPlayer for SystemSound {
    fn play(&self) -> Result<(), ZenError> {
        for (cmd, sound_file) in SOUND_COMMANDS {
            if !Path::new(sound_file).exists() {
                continue;
            }

            match Command::new(cmd)
                .arg(sound_file)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => {
                    reap(child);
                    return Ok(());
                }
                Err(e) => debug!(player = cmd, error = %e, "Sound player unavailable"),
            }
        }

        TerminalBell.play()
    }
}

/// Wait on a player in the background so it does not linger as a zombie.
fn reap(mut child: Child) -> JoinHandle<std::io::Result<ExitStatus>> {
    thread::spawn(move || child.wait())
}

/// Writes the BEL control character to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self) -> Result<(), ZenError> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|e| ZenError::Audio(e.to_string()))
    }
}

/// Sound player that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self) -> Result<(), ZenError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_finished_player_is_reaped() {
        let child = Command::new("true").spawn().unwrap();
        let status = reap(child).join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_null_notifier() {
        let notifier = NullNotifier;
        assert!(!notifier.request_permission());
        assert!(notifier.notify("title", "body").is_ok());
    }

    #[test]
    fn test_desktop_notifier_requests_permission() {
        assert!(DesktopNotifier.request_permission());
    }

    #[test]
    fn test_silent_player() {
        assert!(Silent.play().is_ok());
    }
}
