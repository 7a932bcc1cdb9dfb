//! Configuration for the terminal UI.

use std::path::PathBuf;
use std::time::Duration;

use tenzies_core::GameConfig;

/// Fastest allowed animation tick.
pub const MIN_TICK: Duration = Duration::from_millis(16);

/// Slowest allowed animation tick.
pub const MAX_TICK: Duration = Duration::from_millis(500);

/// Upper bound on confetti particles.
pub const MAX_CONFETTI: usize = 400;

/// Configuration for a terminal session.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Game settings.
    pub game: GameConfig,
    /// Interval between confetti animation frames.
    pub tick_rate: Duration,
    /// Number of confetti particles spawned on a win.
    pub confetti: usize,
    /// Directory for the log file. `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_rate: Duration::from_millis(50),
            confetti: 120,
            log_dir: None,
        }
    }
}

impl TuiConfig {
    /// Seed the dice RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.game = self.game.with_seed(seed);
        self
    }

    /// Set the animation tick (clamped to 16-500 ms).
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate.clamp(MIN_TICK, MAX_TICK);
        self
    }

    /// Set the confetti particle count (clamped to 0-400).
    pub fn with_confetti(mut self, count: usize) -> Self {
        self.confetti = count.min(MAX_CONFETTI);
        self
    }

    /// Write logs into `dir`.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}
