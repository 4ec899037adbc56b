//! # Blackjack CLI Library
//!
//! Command-line driver for the blackjack round engine: plays narrated
//! rounds, runs large strategy simulations and aggregates recorded rounds.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["blackjack", "sim", "--rounds", "1000", "--seed", "42"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one round with narration
//! - `sim`: Compare strategies over many rounds, optionally recording them
//! - `stats`: Aggregate outcomes from JSONL round records
//! - `strategies`: List the built-in strategies
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod tally;
pub mod ui;

use cli::{BlackjackCli, Commands};
use commands::{
    handle_cfg_command, handle_play_command, handle_sim_command, handle_stats_command,
    handle_strategies_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "strategies", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["blackjack", "play", "--strategy", "optimal-soft", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play { strategy, seed } => handle_play_command(&strategy, seed, out),
        Commands::Sim {
            rounds,
            seed,
            strategies,
            output,
        } => handle_sim_command(rounds, seed, strategies, output, out, err),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Strategies => handle_strategies_command(out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    if writeln!(err, "{}", e).is_err()
        || writeln!(err).is_err()
        || writeln!(err, "Blackjack Strategy Simulator").is_err()
        || writeln!(err, "Usage: blackjack <command> [options]\n").is_err()
        || writeln!(err, "Commands:").is_err()
    {
        return exit_code::ERROR;
    }
    for c in COMMANDS {
        if writeln!(err, "  {}", c).is_err() {
            return exit_code::ERROR;
        }
    }
    let _ = writeln!(err, "\nFor full help, run: blackjack --help");
    exit_code::ERROR
}
