//! Foreground countdown.

use std::io::{self, Write};

use colored::Colorize;

use crate::api::SessionApi;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::ZenError;
use crate::output::{format_completion_pretty, to_json_line};
use crate::pomodoro::{render_progress_bar, Completion, SessionKind, SessionTimer};

use super::build_timer;

const BAR_WIDTH: usize = 30;

/// Count down in the foreground until `--cycles` sessions have completed.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run(
    config: &Config,
    api: Box<dyn SessionApi>,
    args: &RunArgs,
    format: OutputFormat,
) -> Result<String, ZenError> {
    let mut timer = build_timer(config, api);
    let mut stdout = io::stdout();
    let completions = run_cycles(
        &mut timer,
        SessionKind::from(args.kind),
        args.cycles,
        format,
        &mut stdout,
    )?;

    match format {
        OutputFormat::Json => Ok(String::new()),
        OutputFormat::Pretty => Ok(format!(
            "{} {} session(s), {} focus session(s) completed",
            "Done:".bold(),
            completions.len(),
            timer.sessions_completed()
        )),
    }
}

/// Drive `timer` through `cycles` completions, reporting to `out`.
///
/// Pretty output redraws a live `MM:SS` line; JSON output writes one object
/// per completion.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_cycles<W: Write>(
    timer: &mut SessionTimer,
    kind: SessionKind,
    cycles: u32,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<Completion>, ZenError> {
    timer.set_session_type(kind);
    let mut completions = Vec::new();

    while completions.len() < cycles as usize {
        // Without auto-start the next session waits for us.
        if !timer.is_running() {
            timer.start();
        }

        if format == OutputFormat::Pretty {
            draw_line(timer, out)?;
        }

        if let Some(completion) = timer.wait_and_poll() {
            match format {
                OutputFormat::Json => writeln!(out, "{}", to_json_line(&completion)?)?,
                OutputFormat::Pretty => {
                    let next_minutes = timer.settings().duration_for(completion.next);
                    writeln!(out)?;
                    writeln!(out, "{}", format_completion_pretty(&completion, next_minutes))?;
                }
            }
            completions.push(completion);
        }
    }

    timer.pause();
    Ok(completions)
}

fn draw_line<W: Write>(timer: &SessionTimer, out: &mut W) -> Result<(), ZenError> {
    write!(
        out,
        "\r{:<12} {} {}",
        timer.label().bold(),
        timer.display(),
        render_progress_bar(timer.progress(), BAR_WIDTH)
    )?;
    out.flush()?;
    Ok(())
}
