//! Game session: the current dice plus win-edge tracking.
//!
//! `GameSession` is owned by whichever front end runs the game. It applies
//! [`GameEvent`]s through the rules and tells the front end, via [`Update`],
//! when the game has just been won so focus moves exactly once.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::dice::{DiceSet, Die, DieId};
use crate::rules;
use crate::source::{FaceSource, IdSource, RandomFaces, UuidIds};
use crate::view::BoardView;

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The primary action: roll, or start a new game once won.
    Roll,
    /// Toggle the hold on one die.
    Hold(DieId),
}

/// Rising-edge detector for the win condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinEdge {
    previous: bool,
}

impl WinEdge {
    /// Start from a known win state.
    pub fn new(won: bool) -> Self {
        Self { previous: won }
    }

    /// Record the current win state. Returns `true` only on false to true.
    pub fn observe(&mut self, won: bool) -> bool {
        let rising = won && !self.previous;
        self.previous = won;
        rising
    }

    /// The last observed win state.
    pub fn is_won(&self) -> bool {
        self.previous
    }
}

/// What a transition changed, from the front end's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Update {
    /// Whether the game is won after the transition.
    pub won: bool,
    /// The transition moved the game into the won state. Fires once per win.
    pub just_won: bool,
    /// The transition replaced every die with a fresh game.
    pub new_game: bool,
}

/// A single game of Tenzies.
#[derive(Debug, Clone)]
pub struct GameSession<F = RandomFaces, I = UuidIds> {
    dice: DiceSet,
    faces: F,
    ids: I,
    edge: WinEdge,
}

impl GameSession {
    /// Start a game with production sources built from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.faces(), UuidIds)
    }
}

impl<F: FaceSource, I: IdSource> GameSession<F, I> {
    /// Start a game with freshly generated dice.
    pub fn new(mut faces: F, mut ids: I) -> Self {
        let dice = rules::generate(&mut faces, &mut ids);
        info!(dice = %dice, "new game");
        Self::with_dice(dice, faces, ids)
    }

    /// Resume from an existing dice set.
    pub fn with_dice(dice: DiceSet, faces: F, ids: I) -> Self {
        Self {
            edge: WinEdge::new(rules::is_won(&dice)),
            dice,
            faces,
            ids,
        }
    }

    /// The current dice.
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    /// The die at a zero-based position.
    pub fn die_at(&self, position: usize) -> Option<&Die> {
        self.dice.get(position)
    }

    /// Whether the game is currently won. Always derived from the dice.
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.dice)
    }

    /// Presentation data for the current dice.
    pub fn view(&self) -> BoardView {
        BoardView::from_dice(&self.dice)
    }

    /// Apply a presentation event.
    pub fn handle(&mut self, event: GameEvent) -> Update {
        match event {
            GameEvent::Roll => self.roll(),
            GameEvent::Hold(id) => self.hold(id),
        }
    }

    /// The primary action: reroll unheld dice, or start a new game once won.
    pub fn roll(&mut self) -> Update {
        let new_game = self.is_won();
        self.dice = rules::roll(&self.dice, &mut self.faces, &mut self.ids);
        if new_game {
            info!(dice = %self.dice, "new game");
        } else {
            debug!(dice = %self.dice, held = self.dice.held_count(), "rolled");
        }
        self.settle(new_game)
    }

    /// Toggle the hold on the die with `id`. Unknown ids change nothing.
    pub fn hold(&mut self, id: DieId) -> Update {
        self.dice = rules::toggle_hold(&self.dice, id);
        debug!(%id, held = self.dice.held_count(), "toggled hold");
        self.settle(false)
    }

    fn settle(&mut self, new_game: bool) -> Update {
        let won = self.is_won();
        let just_won = self.edge.observe(won);
        if just_won {
            info!(face = self.dice.first().value, "game won");
        }
        Update {
            won,
            just_won,
            new_game,
        }
    }
}
