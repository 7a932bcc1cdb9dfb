//! Terminal UI for Tenzies.
//!
//! A ratatui front end over [`tenzies_core::GameSession`]: ten dice, a focus
//! ring shared by the dice and the roll button, confetti once the game is
//! won, and a help popup.

pub mod app;
pub mod board;
pub mod confetti;
pub mod config;
pub mod error;
pub mod logging;
pub mod shared;
pub mod terminal;
