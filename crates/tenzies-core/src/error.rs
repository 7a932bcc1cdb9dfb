//! Error types for text commands and stored boards.
//!
//! The game transitions themselves cannot fail. Turning a line of user input
//! into a [`Command`](crate::Command) can, and so can reading a
//! [`DiceSet`](crate::DiceSet) back from its serialized form.

use thiserror::Error;

use crate::dice::DieId;

/// Result type for command parsing.
pub type GameResult<T> = Result<T, GameError>;

/// Errors produced while reading a text command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command that needs arguments got none.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// A die position is not a number from 1 to 10.
    #[error("invalid position: {0} (expected 1-10)")]
    InvalidPosition(String),
}

/// Errors produced while rebuilding a dice set from its serialized form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceSetError {
    /// Not exactly ten dice.
    #[error("expected 10 dice, got {0}")]
    WrongCount(usize),

    /// A face outside 1-6.
    #[error("die face {0} is out of range (expected 1-6)")]
    FaceOutOfRange(u8),

    /// Two dice share an id.
    #[error("duplicate die id {0}")]
    DuplicateId(DieId),
}
