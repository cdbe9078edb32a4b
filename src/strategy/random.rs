//! Uniform random baseline.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{BoardView, Player};
use crate::graph::VertexId;

use super::Strategy;

/// Picks a uniformly random tokenless vertex by rejection sampling:
/// sample vertex indices with replacement and retry on any vertex that
/// already carries a token. Terminates under the strategy precondition
/// that an unclaimed vertex exists; the expected number of rejections is
/// bounded by the claimed fraction of the board.
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    /// Creates the strategy with an OS-entropy RNG.
    pub fn new() -> Self {
        RandomStrategy {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates the strategy with a fixed seed for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        RandomStrategy::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_vertex(
        &mut self,
        board: &dyn BoardView,
        _player: Player,
        _remaining_turns: u32,
    ) -> VertexId {
        let vertices = board.vertices();
        loop {
            let v = vertices[self.rng.gen_range(0..vertices.len())];
            if !board.has_token(v) {
                return v;
            }
        }
    }
}
