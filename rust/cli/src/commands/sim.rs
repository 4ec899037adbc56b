//! Simulation command: many independent rounds per strategy.
//!
//! Rounds run in parallel with rayon. Round `i` of every strategy is dealt
//! from seed `base + i`, so each strategy faces the same sequence of decks
//! and a run is reproducible whatever the thread scheduling.
//!
//! # Examples
//!
//! ```no_run
//! use blackjack_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! let output = Some("data/rounds.jsonl".to_string());
//! handle_sim_command(Some(1000), Some(42), vec![], output, &mut out, &mut err).unwrap();
//! ```

use crate::config::{self, resolve_strategies};
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::tally::Tally;
use crate::ui;
use blackjack_engine::errors::GameError;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::round::Round;
use blackjack_engine::rules::Outcome;
use blackjack_strategy::Strategy;
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Fully resolved parameters of a simulation run.
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u64,
    pub base_seed: u64,
    pub strategies: Vec<Strategy>,
    pub output: Option<PathBuf>,
}

/// Handle the sim command.
///
/// Flags override the configuration; an empty strategy list on both sides
/// means the full catalogue.
pub fn handle_sim_command(
    rounds: Option<u64>,
    seed: Option<u64>,
    strategies: Vec<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;

    let rounds = rounds.unwrap_or(cfg.rounds);
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let strategies = if strategies.is_empty() {
        cfg.strategy_list()?
    } else {
        resolve_strategies(&strategies)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?
    };

    let opts = SimOptions {
        rounds,
        base_seed: seed.or(cfg.seed).unwrap_or_else(rand::random),
        strategies,
        output: output.map(PathBuf::from),
    };
    simulate(&opts, out, err)
}

/// Runs the simulation described by `opts` and prints one report per strategy.
pub fn simulate(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut logger = match &opts.output {
        Some(p) => {
            if let Err(e) = ensure_parent_dir(p) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            match RoundLogger::create(p) {
                Ok(l) => Some(l),
                Err(e) => {
                    ui::write_error(err, &format!("Failed to open {}: {}", p.display(), e))?;
                    return Err(CliError::Io(e));
                }
            }
        }
        None => None,
    };

    tracing::info!(
        rounds = opts.rounds,
        strategies = opts.strategies.len(),
        seed = opts.base_seed,
        "simulation started"
    );

    ui::write_section(out)?;
    writeln!(
        out,
        "Simulating {} games with each strategy (seed {})",
        opts.rounds, opts.base_seed
    )?;

    for &strategy in &opts.strategies {
        let played = play_rounds(strategy, opts.rounds, opts.base_seed, logger.is_some())?;
        let tally: Tally = played.iter().map(|(outcome, _)| *outcome).collect();

        if let Some(logger) = logger.as_mut() {
            for record in played.into_iter().filter_map(|(_, r)| r) {
                let record = RoundRecord {
                    round_id: logger.next_id(),
                    ..record
                };
                logger.write(&record)?;
            }
        }

        ui::write_divider(out)?;
        writeln!(out, "{}", strategy.title())?;
        writeln!(out, "{}", tally.summary())?;
        tracing::debug!(
            strategy = %strategy,
            wins = tally.wins,
            losses = tally.losses,
            pushes = tally.pushes,
            "strategy finished"
        );
    }

    if let Some(mut logger) = logger
        && let Err(e) = logger.flush()
    {
        ui::write_error(err, "Failed to flush simulation output")?;
        return Err(CliError::Io(e));
    }

    tracing::info!(
        rounds = opts.rounds,
        strategies = opts.strategies.len(),
        "simulation finished"
    );
    Ok(())
}

/// Plays `rounds` rounds of one strategy, keeping the records when asked.
/// The first failing round aborts the batch.
fn play_rounds(
    strategy: Strategy,
    rounds: u64,
    base_seed: u64,
    keep_records: bool,
) -> Result<Vec<(Outcome, Option<RoundRecord>)>, GameError> {
    (0..rounds)
        .into_par_iter()
        .map(|i| {
            let mut round = Round::with_seed(strategy, base_seed.wrapping_add(i));
            let outcome = round.run()?;
            let record = if keep_records {
                round.record(String::new())
            } else {
                None
            };
            Ok((outcome, record))
        })
        .collect()
}
