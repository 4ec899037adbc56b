//! # Play Command
//!
//! Plays a single verbose round and narrates it turn by turn, the quickest
//! sanity check of a strategy's behaviour.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand_short, narrate};
use crate::ui;
use blackjack_engine::round::Round;
use blackjack_strategy::Strategy;
use std::io::Write;

/// Handle the play command.
///
/// The seed comes from `--seed`, then the configured seed, then entropy.
/// A round that fails still has its partial narration printed before the
/// error is returned.
pub fn handle_play_command(
    strategy: &str,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let strategy: Strategy = strategy.parse()?;
    let seed = match seed {
        Some(s) => s,
        None => config::load()?.seed.unwrap_or_else(rand::random),
    };
    play_round(strategy, seed, out)
}

fn play_round(strategy: Strategy, seed: u64, out: &mut dyn Write) -> Result<(), CliError> {
    ui::write_section(out)?;
    writeln!(out, "Verbose single game for logging and sanity checks")?;
    writeln!(out, "Player is using the '{}' strategy (seed {})\n", strategy, seed)?;

    let mut round = Round::with_seed(strategy, seed).verbose(true);
    let result = round.run();
    for line in narrate(round.events()) {
        writeln!(out, "{}", line)?;
    }
    let outcome = result?;
    writeln!(
        out,
        "\nPlayer {} {} vs Dealer {} {}",
        format_hand_short(round.player().cards()),
        round.player().value(),
        format_hand_short(round.dealer().cards()),
        round.dealer().value()
    )?;
    writeln!(out, "{}", outcome)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_narrates_and_announces_outcome() {
        let mut out = Vec::new();
        play_round(Strategy::AlwaysHit, 42, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Dealing cards..."));
        assert!(output.contains("Dealer shows"));
        assert!(output.contains(" vs Dealer ["));
        let last = output.lines().last().unwrap();
        assert!(["Player wins", "Dealer wins", "Nobody wins"].contains(&last));
    }

    #[test]
    fn test_play_is_reproducible_for_a_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        play_round(Strategy::OptimalSoft, 7, &mut a).unwrap();
        play_round(Strategy::OptimalSoft, 7, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_play_rejects_unknown_strategy() {
        let mut out = Vec::new();
        let result = handle_play_command("martingale", Some(1), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
