//! Print a single freshly generated board.

use tenzies_core::GameSession;

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let session = GameSession::from_config(&super::game_config(seed));

    if json {
        let out = serde_json::to_string_pretty(session.dice()).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("{}", super::render_board(&session.view()));
    }

    Ok(())
}
