//! kickoff CLI - interactive project kickoff wizard
//!
//! This is the main entry point for the kickoff command-line interface.

mod cli;
mod commands;
mod output;
mod terminal;
mod version;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let overrides = cli.overrides();
    let config_path = cli.config.clone();

    let result = match cli.command {
        None => commands::wizard::run(&overrides, config_path.as_deref()),
        Some(Commands::Config(cmd)) => commands::config::run(cmd, &overrides, config_path.as_deref()),
        Some(Commands::Version(args)) => commands::version::run(args),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Logs go to stderr so prompts on stdout stay readable. `RUST_LOG` wins
/// over the flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("warn"),
                1 => EnvFilter::new("info"),
                2 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
