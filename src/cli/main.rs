//! Command-line interface entry point for `ccrm`

mod args;
mod commands;
mod logging;

use args::{Cli, Command};
use campus_records::config::Config;
use clap::Parser;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective level: --log-level, then --debug, then config logging.level; fallback warn
    let level = args
        .log_level
        .map(LevelFilter::from)
        .or_else(|| args.debug_flag.then_some(LevelFilter::DEBUG))
        .or_else(|| logging::parse_level(&config.logging.level))
        .unwrap_or(LevelFilter::WARN);

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.as_ref().or(config_log_path.as_ref());

    match logging::init(level, log_path.map(std::path::PathBuf::as_path)) {
        Ok(()) => {
            if let Some(path) = log_path {
                if verbose {
                    eprintln!("✓ File logging initialized at: {}", path.display());
                } else {
                    info!("File logging initialized at: {}", path.display());
                }
            }
        }
        Err(e) => eprintln!("✗ Failed to initialize logging: {e}"),
    }

    let outcome = match args.command.unwrap_or(Command::Shell) {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            Ok(())
        }
        Command::Shell => commands::shell::run(&config, verbose),
        Command::Export => commands::export::run(&config, verbose),
        Command::Backup => commands::backup::run_create(&config),
        Command::Backups => commands::backup::run_list(&config),
    };

    if let Err(e) = outcome {
        error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
