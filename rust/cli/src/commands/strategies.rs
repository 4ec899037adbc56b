//! Lists the built-in strategies.

use crate::error::CliError;
use blackjack_strategy::catalogue;
use std::io::Write;

pub fn handle_strategies_command(out: &mut dyn Write) -> Result<(), CliError> {
    for strategy in catalogue() {
        writeln!(
            out,
            "{:<16} {}",
            strategy.name(),
            strategy.description()
        )?;
    }
    Ok(())
}
