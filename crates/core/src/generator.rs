//! Piece generation
//!
//! Pieces are picked uniformly from the seven kinds using a small seeded LCG,
//! so a seed reproduces a whole game. A scripted mode cycles through a fixed
//! list for tests and puzzle setups.

use crate::error::{Fault, Result};
use crate::pieces::figure;
use crate::shape::Shape;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as seed 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`. The high bits are used; the low bits of an LCG
    /// cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

#[derive(Debug, Clone)]
enum Source {
    Random(SimpleRng),
    Scripted { kinds: Vec<PieceKind>, next: usize },
}

/// Supplies the next falling piece
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    source: Source,
}

impl PieceGenerator {
    /// Uniform random kinds from a seed
    pub fn random(seed: u32) -> Self {
        Self {
            source: Source::Random(SimpleRng::new(seed)),
        }
    }

    /// Cycle through `kinds` in order
    pub fn scripted(kinds: impl IntoIterator<Item = PieceKind>) -> Result<Self> {
        let kinds: Vec<_> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return Err(Fault::EmptyScript);
        }
        Ok(Self {
            source: Source::Scripted { kinds, next: 0 },
        })
    }

    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Random(rng) => {
                let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Source::Scripted { kinds, next } => {
                let kind = kinds[*next];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }

    /// Shape of the next piece
    pub fn get_figure(&mut self) -> Shape {
        figure(self.next_kind())
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::random(1)
    }
}
