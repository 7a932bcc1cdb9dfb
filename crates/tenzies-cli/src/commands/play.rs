use std::io::{self, BufRead, Write};

use colored::Colorize;

use tenzies_core::view::{INSTRUCTIONS, TITLE};
use tenzies_core::{Command, FaceSource, GameEvent, GameSession, IdSource, Update};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut session = GameSession::from_config(&super::game_config(seed));

    println!("  {}", TITLE.bold());
    println!("  {INSTRUCTIONS}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", super::render_board(&session.view()));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("Goodbye!");
                break;
            }
            Command::Help => println!("{}\n", Command::help()),
            Command::Show => println!("{}\n", super::render_board(&session.view())),
            Command::Roll => {
                let update = session.roll();
                println!("{}", report_text(&session, update));
            }
            Command::Hold(positions) => {
                let update = hold_positions(&mut session, &positions);
                println!("{}", report_text(&session, update));
            }
        }
    }

    Ok(())
}

/// Toggle each position in turn.
///
/// The command counts as one step: it reports a win edge only when the board
/// was not won before the command and is won after it.
fn hold_positions<F: FaceSource, I: IdSource>(
    session: &mut GameSession<F, I>,
    positions: &[usize],
) -> Update {
    let was_won = session.is_won();
    for &position in positions {
        let Some(id) = session.die_at(position).map(|d| d.id) else {
            continue;
        };
        session.handle(GameEvent::Hold(id));
    }
    let won = session.is_won();
    Update {
        won,
        just_won: won && !was_won,
        new_game: false,
    }
}

/// What the REPL prints after a roll or hold.
fn report_text<F: FaceSource, I: IdSource>(
    session: &GameSession<F, I>,
    update: Update,
) -> String {
    let view = session.view();
    let mut out = String::new();
    if update.new_game {
        out.push_str(&format!("{}\n", "New game!".cyan().bold()));
    }
    out.push_str(&super::render_board(&view));
    out.push('\n');
    if let Some(announcement) = view.announcement().filter(|_| update.just_won) {
        out.push_str(&format!("{}\n", announcement.green().bold()));
    }
    out
}
