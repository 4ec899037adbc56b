use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No more cards left to deal")]
    DeckExhausted,
    #[error("Action must be either 'HIT' or 'STAND'. Received '{action}'")]
    InvalidAction { action: String },
}
