//! zentimer - A Pomodoro focus/break timer
//!
//! This crate provides the session timer state machine, its settings and
//! session-log backends, and a command-line and terminal interface on top.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pomodoro;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::ZenError;
pub use pomodoro::SessionTimer;
