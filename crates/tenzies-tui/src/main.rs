//! Standalone TUI binary for Tenzies.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use tenzies_tui::app::TuiApp;
use tenzies_tui::config::TuiConfig;

#[derive(Parser)]
#[command(
    name = "tenzies-tui",
    about = "Roll ten dice until they all match, in the terminal",
    version
)]
struct Args {
    /// RNG seed for reproducible dice
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between animation frames (16-500)
    #[arg(long, default_value = "50")]
    tick_ms: u64,

    /// Confetti particles on a win (0-400)
    #[arg(long, default_value = "120")]
    confetti: usize,

    /// Directory for the log file (default: platform cache directory)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let mut config = TuiConfig::default()
        .with_tick_rate(Duration::from_millis(args.tick_ms))
        .with_confetti(args.confetti);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if let Some(dir) = args.log_dir {
        config = config.with_log_dir(dir);
    }

    let guard = match tenzies_tui::logging::init(config.log_dir.as_deref()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: {e}; continuing without a log file");
            None
        }
    };
    tracing::info!(?config, "starting");

    let app = TuiApp::new(&config);

    if let Err(e) = tenzies_tui::terminal::run(app) {
        tracing::error!(error = %e, "terminal UI failed");
        drop(guard);
        eprintln!("error: {e}");
        process::exit(1);
    }
}
