//! Randomness and identity sources.
//!
//! The rules never call an RNG or an id generator directly. They draw faces
//! from a [`FaceSource`] and identifiers from an [`IdSource`], so tests can
//! script both.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::dice::{DieId, MAX_FACE, MIN_FACE};

/// Supplies die faces uniformly distributed over `MIN_FACE..=MAX_FACE`.
pub trait FaceSource {
    /// Draw the next face.
    fn next_face(&mut self) -> u8;
}

/// Supplies identifiers that never repeat for the lifetime of the source.
pub trait IdSource {
    /// Produce a fresh identifier.
    fn next_id(&mut self) -> DieId;
}

/// Faces drawn from a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomFaces {
    rng: StdRng,
}

impl RandomFaces {
    /// Reproducible faces from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Faces seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomFaces {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl FaceSource for RandomFaces {
    fn next_face(&mut self) -> u8 {
        self.rng.random_range(MIN_FACE..=MAX_FACE)
    }
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> DieId {
        DieId(Uuid::new_v4())
    }
}

/// Faces replayed from a fixed script, cycling when it runs out.
///
/// Out-of-range entries are clamped onto a real face. An empty script always
/// yields `MIN_FACE`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFaces {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedFaces {
    /// Replay the given faces in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces
                .into_iter()
                .map(|f| f.clamp(MIN_FACE, MAX_FACE))
                .collect(),
            cursor: 0,
        }
    }

    /// Always yield the same face.
    pub fn constant(face: u8) -> Self {
        Self::new([face])
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        if self.faces.is_empty() {
            return MIN_FACE;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

/// Monotonic identifiers: 1, 2, 3, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    /// Start counting from 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many identifiers have been handed out.
    pub fn issued(&self) -> u128 {
        self.issued
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> DieId {
        self.issued += 1;
        DieId(Uuid::from_u128(self.issued))
    }
}
