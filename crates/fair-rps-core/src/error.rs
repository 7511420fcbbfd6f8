//! Error type shared by every part of the game.

use thiserror::Error;

/// Errors raised while configuring, playing or verifying a game
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    Configuration(String),

    #[error("Move not recognized: {0}")]
    InvalidMove(String),

    #[error("Invalid input: {0:?}")]
    InvalidInput(String),

    #[error("Cryptography unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("Invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
