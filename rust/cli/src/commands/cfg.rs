//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value next to the layer
//! it came from:
//!
//! ```json
//! {
//!   "rounds": { "value": 10000, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   "strategies": { "value": [], "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "strategies": {
            "value": config.strategies,
            "source": sources.strategies,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
