//! Dice generation, the two transitions, and the win predicate.
//!
//! Every function here is total: none of them can fail, and none of them
//! mutate the set they are given.

use crate::dice::{DiceSet, Die, DieId};
use crate::source::{FaceSource, IdSource};

/// Generate a fresh set of ten unheld dice with new identifiers.
pub fn generate(faces: &mut impl FaceSource, ids: &mut impl IdSource) -> DiceSet {
    DiceSet::from_dice(std::array::from_fn(|_| {
        let id = ids.next_id();
        Die::new(id, faces.next_face())
    }))
}

/// True when every die is held and shows the first die's face.
pub fn is_won(dice: &DiceSet) -> bool {
    let target = dice.first().value;
    dice.iter().all(|d| d.held && d.value == target)
}

/// Redraw the face of every unheld die. Held dice are carried over as-is.
pub fn reroll_unheld(dice: &DiceSet, faces: &mut impl FaceSource) -> DiceSet {
    dice.map(|die| {
        if die.held {
            die
        } else {
            die.with_value(faces.next_face())
        }
    })
}

/// The roll action: reroll the unheld dice, or start over once the game is won.
pub fn roll(dice: &DiceSet, faces: &mut impl FaceSource, ids: &mut impl IdSource) -> DiceSet {
    if is_won(dice) {
        generate(faces, ids)
    } else {
        reroll_unheld(dice, faces)
    }
}

/// Flip the held flag of the die with the given id.
///
/// An id not present in the set leaves it unchanged.
pub fn toggle_hold(dice: &DiceSet, id: DieId) -> DiceSet {
    dice.map(|die| if die.id == id { die.toggled() } else { die })
}
