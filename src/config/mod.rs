//! Configuration management for zentimer.
//!
//! This module handles loading and saving configuration from `~/.zentimer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AlertsConfig, BackendConfig, BackendKind, Config, LoggingConfig};
