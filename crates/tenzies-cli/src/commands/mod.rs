pub mod deal;
pub mod play;
pub mod tui;

use colored::Colorize;

use tenzies_core::{BoardView, DieView, GameConfig};

/// Build a game config from an optional `--seed`.
fn game_config(seed: Option<u64>) -> GameConfig {
    match seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    }
}

/// Render the board: a numbered row of dice and the primary action.
fn render_board(view: &BoardView) -> String {
    let positions: Vec<String> = (1..=view.dice.len())
        .map(|n| format!("{n:^5}"))
        .collect();
    let dice: Vec<String> = view.dice.iter().map(render_die).collect();

    let label = if view.won {
        view.primary_label().green().bold()
    } else {
        view.primary_label().bold()
    };

    format!(
        "  {}\n  {}\n  Next: {label}",
        positions.join(" ").dimmed(),
        dice.join(" ")
    )
}

fn render_die(die: &DieView) -> String {
    if die.held {
        format!("[*{}*]", die.value).green().bold().to_string()
    } else {
        format!("[ {} ]", die.value)
    }
}
