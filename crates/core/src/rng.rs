//! Seeded 7-bag piece queue.
//!
//! One of each kind per bag, shuffled with a PCG stream derived from the
//! playfield seed. The queue lives inside every board value, so a cloned
//! playfield replays exactly the same pieces.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    bag: [PieceKind; 7],
    cursor: usize,
    rng: Pcg32,
}

impl PieceQueue {
    pub fn new(seed: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(u64::from(seed));
        let mut bag = PieceKind::ALL;
        bag.shuffle(&mut rng);
        Self {
            bag,
            cursor: 0,
            rng,
        }
    }

    /// Kind the next [`draw`](Self::draw) will return, even across a bag boundary.
    pub fn peek(&self) -> PieceKind {
        self.clone().draw()
    }

    pub fn draw(&mut self) -> PieceKind {
        if self.cursor == self.bag.len() {
            self.bag = PieceKind::ALL;
            self.bag.shuffle(&mut self.rng);
            self.cursor = 0;
        }

        let kind = self.bag[self.cursor];
        self.cursor += 1;
        kind
    }

    pub fn remaining_in_bag(&self) -> &[PieceKind] {
        &self.bag[self.cursor..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
