//! UI helper functions for terminal output formatting.

use std::io::Write;

/// Width of the separator rules between report sections
pub const RULE_WIDTH: usize = 72;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Heavy rule opening a report section.
pub fn write_section(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Light rule between entries of a section.
pub fn write_divider(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}
