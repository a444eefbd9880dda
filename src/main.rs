use clap::Parser;
use colored::Colorize;

use zentimer::cli::args::{Cli, Commands};
use zentimer::cli::commands;
use zentimer::config::{Config, Paths};
use zentimer::error::ZenError;
use zentimer::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ZenError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    // The TUI owns the terminal, so its logs go to a file.
    if matches!(cli.command, Commands::Tui) {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        logging::init_to_file(&config.logging.level, &paths.log_file)?;
    } else {
        logging::init(&config.logging.level);
    }

    let output = match cli.command {
        Commands::Completions { shell } => commands::completions(shell)?,
        command => {
            let api = commands::open_api(&config, cli.backend, cli.server.as_deref())?;
            match command {
                Commands::Tui => {
                    let timer = commands::build_timer(&config, api);
                    zentimer::tui::run(timer)?;
                    String::new()
                }
                Commands::Run(args) => commands::run(&config, api, &args, format)?,
                Commands::Settings(args) => {
                    commands::settings(&config, api, args.command, format)?
                }
                Commands::History { limit } => commands::history(api.as_ref(), limit, format)?,
                Commands::Log(args) => commands::log(api.as_ref(), args, format)?,
                Commands::Stats => commands::stats(api.as_ref(), format)?,
                Commands::Completions { .. } => String::new(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
