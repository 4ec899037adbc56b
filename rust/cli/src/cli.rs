//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Single-deck blackjack strategy simulator"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one narrated round with the given strategy
    Play {
        #[arg(long, default_value = "always-hit")]
        strategy: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate many rounds per strategy and report win/loss/push rates
    Sim {
        /// Rounds per strategy (default from configuration)
        #[arg(long)]
        rounds: Option<u64>,
        /// Base seed; round i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy to simulate; repeat for several (default: all)
        #[arg(long = "strategy")]
        strategies: Vec<String>,
        /// Append one JSON record per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate outcomes from JSONL round records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// List the built-in strategies
    Strategies,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subcommand_parses() {
        let commands = vec![
            vec!["blackjack", "cfg"],
            vec!["blackjack", "strategies"],
            vec!["blackjack", "play"],
            vec!["blackjack", "play", "--strategy", "optimal-soft", "--seed", "3"],
            vec!["blackjack", "sim", "--rounds", "10"],
            vec![
                "blackjack", "sim", "--strategy", "always-hit", "--strategy", "stand-after-17",
            ],
            vec!["blackjack", "stats", "--input", "rounds.jsonl"],
        ];
        for args in commands {
            assert!(
                BlackjackCli::try_parse_from(&args).is_ok(),
                "Failed to parse: {:?}",
                args
            );
        }
    }

    #[test]
    fn test_repeated_strategy_flags_collect() {
        let cli = BlackjackCli::try_parse_from([
            "blackjack",
            "sim",
            "--strategy",
            "always-hit",
            "--strategy",
            "optimal-hard",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Sim { strategies, .. } => {
                assert_eq!(strategies, vec!["always-hit", "optimal-hard"])
            }
            other => panic!("Expected Commands::Sim, got {:?}", other),
        }
    }

    #[test]
    fn test_stats_requires_input() {
        assert!(BlackjackCli::try_parse_from(["blackjack", "stats"]).is_err());
    }

    #[test]
    fn test_rounds_must_be_numeric() {
        assert!(BlackjackCli::try_parse_from(["blackjack", "sim", "--rounds", "many"]).is_err());
    }
}
