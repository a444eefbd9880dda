//! Command implementations for zentimer.
//!
//! Every command returns the text to print; `main` does the printing.

mod completions;
mod history;
mod run;
mod settings;

pub use completions::completions;
pub use history::{history, log, stats};
pub use run::{run, run_cycles};
pub use settings::{merge_settings, settings};

use std::time::Duration;

use tracing::{debug, warn};

use crate::api::{HttpApi, LocalApi, SessionApi};
use crate::config::{BackendKind, Config};
use crate::error::ZenError;
use crate::pomodoro::{
    Capabilities, DesktopNotifier, Notifier, NullNotifier, SessionTimer, Silent, SoundPlayer,
    SystemClock, SystemSound, TerminalBell,
};

/// Which backend a command talks to.
///
/// `--backend` wins, then `--server` (which implies remote), then the config.
#[must_use]
pub fn resolve_backend(
    config: &Config,
    backend: Option<BackendKind>,
    server: Option<&str>,
) -> BackendKind {
    backend.unwrap_or_else(|| {
        if server.is_some() {
            BackendKind::Remote
        } else {
            config.backend.kind
        }
    })
}

/// Open the settings/session backend.
///
/// # Errors
///
/// Returns an error if the local database cannot be opened.
pub fn open_api(
    config: &Config,
    backend: Option<BackendKind>,
    server: Option<&str>,
) -> Result<Box<dyn SessionApi>, ZenError> {
    match resolve_backend(config, backend, server) {
        BackendKind::Local => {
            debug!("Using local backend");
            Ok(Box::new(LocalApi::open()?))
        }
        BackendKind::Remote => {
            let base_url = server.unwrap_or(&config.backend.base_url);
            debug!(base_url, "Using remote backend");
            let timeout = Duration::from_secs(config.backend.timeout_secs.max(1));
            Ok(Box::new(
                HttpApi::new(base_url)
                    .with_timeout(timeout)
                    .with_session_cookie(config.backend.session_cookie.clone()),
            ))
        }
    }
}

/// Build a timer with the configured alerts, then pull the backend's settings.
///
/// The configured timer settings stay in effect if the backend cannot be
/// reached.
pub fn build_timer(config: &Config, api: Box<dyn SessionApi>) -> SessionTimer {
    let notifier: Box<dyn Notifier> = if config.alerts.desktop_notifications {
        Box::new(DesktopNotifier)
    } else {
        Box::new(NullNotifier)
    };
    if !notifier.request_permission() {
        debug!("Desktop notifications disabled");
    }

    let sound: Box<dyn SoundPlayer> = if config.alerts.system_sound {
        Box::new(SystemSound)
    } else {
        Box::new(TerminalBell)
    };

    let mut timer = SessionTimer::new(
        config.timer.clone(),
        Capabilities {
            api,
            clock: Box::new(SystemClock),
            notifier,
            sound,
        },
    );
    if !timer.load_settings() {
        warn!("Using configured timer settings");
    }
    timer
}

/// Timer that never alerts, for commands that only touch settings.
pub(crate) fn quiet_timer(config: &Config, api: Box<dyn SessionApi>) -> SessionTimer {
    SessionTimer::new(
        config.timer.clone(),
        Capabilities {
            api,
            clock: Box::new(SystemClock),
            notifier: Box::new(NullNotifier),
            sound: Box::new(Silent),
        },
    )
}
