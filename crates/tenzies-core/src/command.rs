//! Text commands for line-oriented front ends.

use crate::dice::DICE_COUNT;
use crate::error::{GameError, GameResult};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Roll the unheld dice, or start a new game after a win.
    Roll,
    /// Toggle the hold on the dice at these zero-based positions.
    Hold(Vec<usize>),
    /// Print the board again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parse a line such as `roll`, `hold 1 4 7`, or `q`.
    ///
    /// Positions are entered 1-based and stored 0-based.
    pub fn parse(input: &str) -> GameResult<Self> {
        let mut words = input.split_whitespace();
        let Some(cmd) = words.next() else {
            return Err(GameError::MissingArgument("command".to_string()));
        };

        match cmd.to_lowercase().as_str() {
            "roll" | "r" | "new" => Ok(Self::Roll),
            "hold" | "h" => {
                let positions = words.map(parse_position).collect::<GameResult<Vec<_>>>()?;
                if positions.is_empty() {
                    return Err(GameError::MissingArgument(
                        "usage: hold <position> [position ...]".to_string(),
                    ));
                }
                Ok(Self::Hold(positions))
            }
            "show" | "s" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(GameError::UnknownCommand(other.to_string())),
        }
    }

    /// One-line usage summary for every command.
    pub fn help() -> &'static str {
        "Commands:\n  \
         roll (r)             Roll the unheld dice (or start a new game)\n  \
         hold (h) <n> [n ...] Hold or release dice by position (1-10)\n  \
         show (s)             Print the board\n  \
         help (?)             Show this help\n  \
         quit (q)             Leave the game"
    }
}

fn parse_position(word: &str) -> GameResult<usize> {
    match word.parse::<usize>() {
        Ok(n) if (1..=DICE_COUNT).contains(&n) => Ok(n - 1),
        _ => Err(GameError::InvalidPosition(word.to_string())),
    }
}
