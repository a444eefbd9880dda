//! Settings commands.

use colored::Colorize;

use crate::api::SessionApi;
use crate::cli::args::{OutputFormat, SetSettingsArgs, SettingsCommands};
use crate::config::Config;
use crate::error::ZenError;
use crate::output::format_settings;
use crate::pomodoro::Settings;

use super::quiet_timer;

/// Execute settings subcommands.
///
/// # Errors
///
/// Returns an error if the settings cannot be read, are invalid, or the
/// backend refuses them.
pub fn settings(
    config: &Config,
    api: Box<dyn SessionApi>,
    cmd: SettingsCommands,
    format: OutputFormat,
) -> Result<String, ZenError> {
    match cmd {
        SettingsCommands::Show => {
            let current = api.fetch_settings()?;
            format_settings(&current, format)
        }
        SettingsCommands::Set(args) => set(config, api, &args, format),
    }
}

fn set(
    config: &Config,
    api: Box<dyn SessionApi>,
    args: &SetSettingsArgs,
    format: OutputFormat,
) -> Result<String, ZenError> {
    let mut timer = quiet_timer(config, api);
    // Edits apply on top of the backend's copy; fall back to the config.
    timer.load_settings();

    let updated = merge_settings(timer.settings(), args);
    updated.validate()?;

    if !timer.save_settings(updated) {
        return Err(ZenError::Config(
            "Settings were not saved; the backend refused them".to_string(),
        ));
    }

    match format {
        OutputFormat::Json => format_settings(timer.settings(), format),
        OutputFormat::Pretty => Ok(format!(
            "{}\n\n{}",
            "Settings saved!".green().bold(),
            format_settings(timer.settings(), format)?
        )),
    }
}

/// Apply the fields given on the command line to `current`.
#[must_use]
pub fn merge_settings(current: &Settings, args: &SetSettingsArgs) -> Settings {
    Settings {
        focus_duration: args.focus.unwrap_or(current.focus_duration),
        short_break_duration: args.short_break.unwrap_or(current.short_break_duration),
        long_break_duration: args.long_break.unwrap_or(current.long_break_duration),
        sessions_until_long_break: args
            .sessions_until_long
            .unwrap_or(current.sessions_until_long_break),
        auto_start_breaks: args.auto_start_breaks.unwrap_or(current.auto_start_breaks),
        auto_start_focus: args.auto_start_focus.unwrap_or(current.auto_start_focus),
        sound_enabled: args.sound.unwrap_or(current.sound_enabled),
    }
}
