//! RNG module - deterministic spawn randomness
//!
//! A small LCG so a game is fully reproducible from its seed: the same seed
//! and the same inputs always produce the same sequence of spawns.

use crate::pieces::get_shape;
use crate::types::{PieceKind, SPAWN_ROW};
use crate::Piece;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max); 0 when `max` is 0
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly pick a catalog kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Roll a fresh piece for a board `board_width` columns wide.
    ///
    /// The column is chosen so the whole spawn shape fits horizontally.
    pub fn next_piece(&mut self, board_width: usize) -> Piece {
        let kind = self.next_kind();
        let slots = board_width.saturating_sub(get_shape(kind).width()) + 1;
        let x = self.next_range(slots as u32) as i32;
        Piece::spawn(kind, x, SPAWN_ROW)
    }
}
