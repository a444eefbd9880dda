//! Error types for zentimer.

use thiserror::Error;

/// Errors produced by zentimer.
#[derive(Error, Debug)]
pub enum ZenError {
    /// Configuration could not be read, written or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local database failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Remote backend request failed (transport error or non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON (de)serialization failure.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings record failed validation.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// The operation is not available with the selected backend.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Desktop notification could not be shown.
    #[error("Notification error: {0}")]
    Notification(String),

    /// Audible cue could not be played.
    #[error("Audio error: {0}")]
    Audio(String),
}
