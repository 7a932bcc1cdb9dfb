//! Configuration for a game session.

use crate::source::RandomFaces;

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible faces. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the face source this configuration describes.
    pub fn faces(&self) -> RandomFaces {
        match self.seed {
            Some(seed) => RandomFaces::seeded(seed),
            None => RandomFaces::from_entropy(),
        }
    }
}
