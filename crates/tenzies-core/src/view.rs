//! Presentation data derived from a dice set.
//!
//! A front end renders a [`BoardView`] and sends [`GameEvent`]s back. It never
//! touches the dice directly.

use crate::dice::{DiceSet, DieId};
use crate::rules::is_won;
use crate::session::GameEvent;

/// Game title.
pub const TITLE: &str = "Tenzies";

/// How to play, shown under the title.
pub const INSTRUCTIONS: &str = "Roll until all dice are the same. Click each die to freeze it at its current value between rolls.";

/// Primary action label while playing.
pub const ROLL_LABEL: &str = "Roll";

/// Primary action label once the game is won.
pub const NEW_GAME_LABEL: &str = "New Game";

/// Announcement for assistive technology once the game is won.
pub const WIN_ANNOUNCEMENT: &str =
    "Congratulations! You won! Press \"New Game\" to start again.";

/// What a front end needs to draw one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieView {
    /// Identity to send back when the die is clicked.
    pub id: DieId,
    /// Face showing.
    pub value: u8,
    /// Whether the die is held.
    pub held: bool,
}

impl DieView {
    /// The event that toggles this die's hold.
    pub fn hold_event(&self) -> GameEvent {
        GameEvent::Hold(self.id)
    }
}

/// Everything a front end needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Dice in display order.
    pub dice: Vec<DieView>,
    /// Whether the win condition holds.
    pub won: bool,
}

impl BoardView {
    /// Derive the view of a dice set.
    pub fn from_dice(dice: &DiceSet) -> Self {
        Self {
            dice: dice
                .iter()
                .map(|d| DieView {
                    id: d.id,
                    value: d.value,
                    held: d.held,
                })
                .collect(),
            won: is_won(dice),
        }
    }

    /// Label of the primary action control.
    pub fn primary_label(&self) -> &'static str {
        if self.won { NEW_GAME_LABEL } else { ROLL_LABEL }
    }

    /// The event the primary action control sends.
    pub fn primary_event(&self) -> GameEvent {
        GameEvent::Roll
    }

    /// Whether the celebration effect should be showing.
    pub fn celebrate(&self) -> bool {
        self.won
    }

    /// Victory text, present only when won.
    pub fn announcement(&self) -> Option<&'static str> {
        self.won.then_some(WIN_ANNOUNCEMENT)
    }
}
