//! Dice, their identifiers, and the fixed-size dice set.
//!
//! Dice are plain values. Every transition builds a new [`DiceSet`] instead
//! of mutating the dice it was given, so a presentation layer can compare the
//! old and new sets to find what changed.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DiceSetError;

/// Number of dice in every game.
pub const DICE_COUNT: usize = 10;

/// Lowest face of a die.
pub const MIN_FACE: u8 = 1;

/// Highest face of a die.
pub const MAX_FACE: u8 = 6;

/// Identity of a single die, stable for the die's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub Uuid);

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

/// A single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    /// Identity of this die.
    pub id: DieId,
    /// The face showing, in `MIN_FACE..=MAX_FACE`.
    pub value: u8,
    /// Whether the die is frozen between rolls.
    pub held: bool,
}

impl Die {
    /// Create an unheld die.
    pub fn new(id: DieId, value: u8) -> Self {
        Self {
            id,
            value,
            held: false,
        }
    }

    /// The same die showing a different face.
    pub fn with_value(self, value: u8) -> Self {
        Self { value, ..self }
    }

    /// The same die with its held flag inverted.
    pub fn toggled(self) -> Self {
        Self {
            held: !self.held,
            ..self
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.held {
            write!(f, "[*{}*]", self.value)
        } else {
            write!(f, "[ {} ]", self.value)
        }
    }
}

/// The ten dice of a game, in presentation order.
///
/// Serializes as a plain list. Deserializing checks the count, the faces,
/// and that every id is distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Die>", try_from = "Vec<Die>")]
pub struct DiceSet([Die; DICE_COUNT]);

impl DiceSet {
    /// Wrap ten dice.
    pub fn from_dice(dice: [Die; DICE_COUNT]) -> Self {
        Self(dice)
    }

    /// The dice as a slice.
    pub fn as_slice(&self) -> &[Die] {
        &self.0
    }

    /// Iterate over the dice in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.0.iter()
    }

    /// The die at a zero-based position.
    pub fn get(&self, position: usize) -> Option<&Die> {
        self.0.get(position)
    }

    /// The first die. A set always has one.
    pub fn first(&self) -> &Die {
        &self.0[0]
    }

    /// Position of the die with the given id.
    pub fn position(&self, id: DieId) -> Option<usize> {
        self.0.iter().position(|d| d.id == id)
    }

    /// Number of held dice.
    pub fn held_count(&self) -> usize {
        self.0.iter().filter(|d| d.held).count()
    }

    /// Build a new set by transforming every die in order.
    pub fn map(&self, f: impl FnMut(Die) -> Die) -> Self {
        Self(self.0.map(f))
    }
}

impl From<DiceSet> for Vec<Die> {
    fn from(set: DiceSet) -> Self {
        set.0.to_vec()
    }
}

impl TryFrom<Vec<Die>> for DiceSet {
    type Error = DiceSetError;

    fn try_from(dice: Vec<Die>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for die in &dice {
            if !(MIN_FACE..=MAX_FACE).contains(&die.value) {
                return Err(DiceSetError::FaceOutOfRange(die.value));
            }
            if !seen.insert(die.id) {
                return Err(DiceSetError::DuplicateId(die.id));
            }
        }
        let count = dice.len();
        let dice: [Die; DICE_COUNT] = dice
            .try_into()
            .map_err(|_| DiceSetError::WrongCount(count))?;
        Ok(Self(dice))
    }
}

impl<'a> IntoIterator for &'a DiceSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dice: Vec<String> = self.0.iter().map(Die::to_string).collect();
        write!(f, "{}", dice.join(" "))
    }
}
