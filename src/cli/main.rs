//! Command-line interface entry point for `Tallybook`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;
use tallybook::config::Config;
use tallybook::core::calories::DEFAULT_LOG_FILE;
use tallybook::core::input::Prompter;
use tallybook::info;
use tallybook::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Gradebook => {
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            let mut session = commands::gradebook::GradebookSession::new(
                config.grading.pass_threshold,
            );
            if let Err(e) = session.run(&mut prompter) {
                eprintln!("✗ {e}");
            }
        }
        Command::Analyze {
            input_file,
            threshold,
            report,
            output,
        } => {
            commands::analyze::run(
                &input_file,
                threshold,
                report.as_deref(),
                output.as_deref(),
                &config,
            );
        }
        Command::Calories { log_path } => {
            let log_path = log_path.unwrap_or_else(|| {
                if config.paths.calorie_log.is_empty() {
                    PathBuf::from(DEFAULT_LOG_FILE)
                } else {
                    PathBuf::from(&config.paths.calorie_log)
                }
            });
            commands::calories::run(&log_path);
        }
    }
}
