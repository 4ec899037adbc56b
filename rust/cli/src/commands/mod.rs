//! Command handler modules for the blackjack CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod play;
pub mod sim;
pub mod stats;
pub mod strategies;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
pub use strategies::handle_strategies_command;
