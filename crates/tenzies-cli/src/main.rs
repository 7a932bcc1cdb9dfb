//! CLI frontend for Tenzies.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tenzies",
    about = "Tenzies: roll ten dice until they all match",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game line by line on stdin/stdout
    Play {
        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print one freshly rolled board
    Deal {
        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Deal { seed, json } => commands::deal::run(seed, json),
        Commands::Tui { seed } => commands::tui::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
