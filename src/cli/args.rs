use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::api::HISTORY_LIMIT;
use crate::config::BackendKind;
use crate::pomodoro::SessionKind;

#[derive(Parser)]
#[command(name = "zentimer")]
#[command(about = "A Pomodoro focus/break timer for the terminal")]
#[command(long_about = "zentimer - A Pomodoro focus/break timer

Counts down focus sessions and breaks, moving to a long break after every
few focus sessions. Completed focus sessions are logged to a settings/session
backend: the local database by default, or a remote server.

QUICK START:
  zentimer tui                  Interactive timer (Space to start/pause)
  zentimer run                  Count down one focus session
  zentimer settings show        Show durations and cycle length
  zentimer history              Recently completed sessions

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Settings/session backend (overrides config)
    #[arg(long, value_enum, global = true)]
    pub backend: Option<BackendKind>,

    /// Remote server root, e.g. http://localhost:5000 (implies --backend remote)
    #[arg(long, global = true, env = "ZENTIMER_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Session kind as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    #[value(alias = "f")]
    Focus,
    #[value(name = "short_break", alias = "short")]
    ShortBreak,
    #[value(name = "long_break", alias = "long")]
    LongBreak,
}

impl From<KindArg> for SessionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Focus => Self::Focus,
            KindArg::ShortBreak => Self::ShortBreak,
            KindArg::LongBreak => Self::LongBreak,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive timer
    ///
    /// Full-screen countdown with the session label, cycle position and
    /// completed-session count.
    ///
    /// # Keys
    ///
    ///   Space    Start / pause
    ///   r        Reset the current session
    ///   s        Skip to the next session
    ///   1 2 3    Focus / short break / long break (while paused)
    ///   L        Reload settings from the backend
    ///   q        Quit
    Tui,

    /// Count down in the foreground
    ///
    /// Runs the timer until the requested number of sessions (focus or
    /// break) have completed, then exits.
    ///
    /// # Examples
    ///
    ///   zentimer run                     One focus session
    ///   zentimer run --cycles 8          Four focus sessions and their breaks
    ///   zentimer run --type short_break  Just a short break
    Run(RunArgs),

    /// Show or change timer settings
    Settings(SettingsArgs),

    /// Show recently completed sessions
    History {
        /// Maximum number of sessions to show
        #[arg(long, short = 'n', default_value_t = HISTORY_LIMIT)]
        limit: usize,
    },

    /// Record a completed session by hand
    Log(LogArgs),

    /// Show today's pomodoro count and focus minutes
    Stats,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   zentimer completions zsh > ~/.zsh/completions/_zentimer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Session kind to start with
    #[arg(long = "type", short = 't', value_enum, default_value = "focus")]
    pub kind: KindArg,

    /// Number of sessions to complete before exiting
    #[arg(long, short = 'c', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: u32,
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the backend's current settings
    Show,

    /// Change settings and save them to the backend
    ///
    /// Fields not given keep their current value.
    ///
    /// Examples:
    ///   zentimer settings set --focus 50 --short-break 10
    ///   zentimer settings set --sessions-until-long 3 --auto-start-breaks true
    Set(SetSettingsArgs),
}

#[derive(Args, Default)]
pub struct SetSettingsArgs {
    /// Focus duration in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub focus: Option<u32>,

    /// Short break duration in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub short_break: Option<u32>,

    /// Long break duration in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub long_break: Option<u32>,

    /// Focus sessions before a long break
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub sessions_until_long: Option<u32>,

    /// Start breaks automatically
    #[arg(long)]
    pub auto_start_breaks: Option<bool>,

    /// Start focus sessions automatically after a break
    #[arg(long)]
    pub auto_start_focus: Option<bool>,

    /// Play a sound when a session completes
    #[arg(long)]
    pub sound: Option<bool>,
}

#[derive(Args)]
pub struct LogArgs {
    /// Session kind
    #[arg(long = "type", short = 't', value_enum, default_value = "focus")]
    pub kind: KindArg,

    /// Session length in minutes
    #[arg(long, short = 'm', value_parser = clap::value_parser!(u32).range(1..))]
    pub minutes: u32,

    /// Notes for this session
    #[arg(long, short = 'n')]
    pub notes: Option<String>,
}
