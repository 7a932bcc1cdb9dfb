//! Core game model for Tenzies.
//!
//! Ten dice are rolled; the player holds dice between rolls until all ten
//! are held and show the same face. This crate owns the dice model, the roll
//! and hold transitions, the derived win predicate, and the session that
//! reports the win edge to presentation layers.

pub mod command;
pub mod config;
pub mod dice;
pub mod error;
pub mod rules;
pub mod session;
pub mod source;
pub mod view;

pub use command::Command;
pub use config::GameConfig;
pub use dice::{DICE_COUNT, DiceSet, Die, DieId, MAX_FACE, MIN_FACE};
pub use error::{DiceSetError, GameError, GameResult};
pub use rules::{generate, is_won, roll, toggle_hold};
pub use session::{GameEvent, GameSession, Update, WinEdge};
pub use source::{FaceSource, IdSource, RandomFaces, ScriptedFaces, SequentialIds, UuidIds};
pub use view::{BoardView, DieView};
