//! Configuration settings for zentimer.
//!
//! Settings are loaded from `~/.zentimer/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::ZenError;
use crate::pomodoro::Settings;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Where settings and the session log live.
    pub backend: BackendConfig,
    /// Timer settings used until the backend answers.
    pub timer: Settings,
    /// Completion alerts.
    pub alerts: AlertsConfig,
    /// Diagnostic logging.
    pub logging: LoggingConfig,
}

/// Which backend to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// `SQLite` database under `~/.zentimer/`.
    #[default]
    Local,
    /// Remote `/pomodoro/api` server.
    Remote,
}

/// Backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// Server root for the remote backend.
    pub base_url: String,
    /// Login session cookie sent to the remote backend (e.g. `session=...`).
    pub session_cookie: Option<String>,
    /// Per-request timeout for the remote backend, in seconds.
    pub timeout_secs: u64,
}

/// Completion alert settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// Show desktop notifications.
    pub desktop_notifications: bool,
    /// Play the system sound; otherwise ring the terminal bell.
    pub system_sound: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub level: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            base_url: default_base_url(),
            session_cookie: None,
            timeout_secs: 3,
        }
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            desktop_notifications: true,
            system_sound: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ZenError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if its timer settings are invalid.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ZenError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ZenError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            ZenError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.timer.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.backend.kind, BackendKind::Local);
        assert_eq!(config.backend.base_url, "http://localhost:5000");
        assert_eq!(config.backend.timeout_secs, 3);
        assert_eq!(config.timer, Settings::default());
        assert!(config.alerts.desktop_notifications);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.backend.kind, BackendKind::Local);
    }

    #[test]
    fn test_load_remote_backend() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
backend:
  kind: remote
  base_url: http://pomo.example
  session_cookie: session=abc
  timeout_secs: 10
";
        std::fs::write(&config_path, yaml).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.backend.kind, BackendKind::Remote);
        assert_eq!(loaded.backend.session_cookie.as_deref(), Some("session=abc"));
        assert_eq!(loaded.backend.timeout_secs, 10);
        assert_eq!(loaded.timer, Settings::default());
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  focus_duration: 45
alerts:
  system_sound: false
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.focus_duration, 45);
        assert_eq!(config.timer.short_break_duration, 5);
        assert!(!config.alerts.system_sound);
        assert!(config.alerts.desktop_notifications);
        assert_eq!(config.backend.kind, BackendKind::Local);
    }

    #[test]
    fn test_invalid_timer_settings_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  sessions_until_long_break: 0\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ZenError::InvalidSettings(_)));
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "backend: [unclosed").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(ZenError::Config(_))
        ));
    }
}
