//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`]
//! renders the error as `Error: ...` on stderr and maps it to exit code 2.

use std::fmt;

use blackjack_engine::errors::GameError;
use blackjack_strategy::UnknownStrategy;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// A round failed to complete
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<UnknownStrategy> for CliError {
    fn from(error: UnknownStrategy) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_errors_become_engine_errors() {
        let e: CliError = GameError::DeckExhausted.into();
        assert_eq!(e.to_string(), "Engine error: No more cards left to deal");

        let e: CliError = GameError::InvalidAction {
            action: "DOUBLE".to_string(),
        }
        .into();
        assert!(matches!(e, CliError::Engine(ref msg) if msg.contains("'DOUBLE'")));
    }

    #[test]
    fn test_unknown_strategy_is_invalid_input() {
        let e: CliError = UnknownStrategy("yolo".to_string()).into();
        assert_eq!(e.to_string(), "Invalid input: Unknown strategy: yolo");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("disk full").into();
        assert!(e.source().is_some());
    }
}
