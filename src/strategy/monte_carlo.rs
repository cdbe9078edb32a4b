//! Monte-Carlo rollout evaluation.
//!
//! For every unclaimed candidate vertex, simulates many random
//! completions of the remaining placements for both players and scores
//! each completed position with a full-graph nearest-token partition.
//! The candidate with the best average score differential wins. This is
//! randomized-playout value estimation, not tree search: the rest of the
//! game is treated as a random process to approximate each candidate's
//! expected marginal territory.
//!
//! Candidates are evaluated in parallel with rayon. Each rollout seeds
//! its own `SmallRng` from the strategy seed plus a per-rollout offset,
//! so results are identical for a fixed seed regardless of worker
//! scheduling.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::board::{BoardView, Player};
use crate::graph::VertexId;

use super::{token_sets, unclaimed_vertices, Strategy};

/// Default number of rollouts per candidate vertex.
const SIMULATIONS_PER_CANDIDATE: usize = 25;

/// Rollout-evaluating strategy.
pub struct MonteCarloStrategy {
    simulations: usize,
    seed: u64,
}

impl MonteCarloStrategy {
    /// Creates the strategy with the default simulation count, seeded
    /// from OS entropy.
    pub fn new() -> Self {
        MonteCarloStrategy::seeded(rand::random())
    }

    /// Creates the strategy with a fixed seed for reproducible choices.
    pub fn seeded(seed: u64) -> Self {
        MonteCarloStrategy {
            simulations: SIMULATIONS_PER_CANDIDATE,
            seed,
        }
    }

    /// Overrides the number of rollouts per candidate.
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations.max(1);
        self
    }

    /// Runs one rollout for `candidate` and returns its territory
    /// differential (my score minus opponent score).
    fn rollout(
        &self,
        board: &dyn BoardView,
        mine: &[VertexId],
        theirs: &[VertexId],
        available: &[VertexId],
        candidate: VertexId,
        moves_left: usize,
        rng: &mut SmallRng,
    ) -> f64 {
        let mut sim_mine = mine.to_vec();
        let mut sim_theirs = theirs.to_vec();
        sim_mine.push(candidate);

        // Shuffle the rest of the pool and deal the remaining placements
        // alternately, opponent first.
        let mut pool: Vec<VertexId> = available
            .iter()
            .copied()
            .filter(|&v| v != candidate)
            .collect();
        pool.shuffle(rng);

        let deals = moves_left.saturating_sub(1).min(pool.len());
        for (i, &pick) in pool[..deals].iter().enumerate() {
            if i % 2 == 0 {
                sim_theirs.push(pick);
            } else {
                sim_mine.push(pick);
            }
        }

        partition_differential(board, &sim_mine, &sim_theirs)
    }
}

impl Default for MonteCarloStrategy {
    fn default() -> Self {
        MonteCarloStrategy::new()
    }
}

impl Strategy for MonteCarloStrategy {
    fn choose_vertex(
        &mut self,
        board: &dyn BoardView,
        player: Player,
        remaining_turns: u32,
    ) -> VertexId {
        let (mine, theirs) = token_sets(board, player);
        let available = unclaimed_vertices(board);

        // `remaining_turns` includes this pick; the opponent has the
        // same number of placements still to make.
        let moves_left = 2 * remaining_turns as usize;

        // Average differential per candidate, computed in parallel and
        // collected back in enumeration order.
        let averages: Vec<f64> = available
            .par_iter()
            .enumerate()
            .map(|(ci, &candidate)| {
                let mut sum = 0.0;
                for sim in 0..self.simulations {
                    let offset = (ci * self.simulations + sim) as u64;
                    let mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(offset));
                    sum += self.rollout(
                        board,
                        &mine,
                        &theirs,
                        &available,
                        candidate,
                        moves_left,
                        &mut rng,
                    );
                }
                sum / self.simulations as f64
            })
            .collect();

        let mut best = 0;
        for (i, &avg) in averages.iter().enumerate() {
            if avg > averages[best] {
                best = i;
            }
        }
        available[best]
    }
}

/// Scores a simulated final position: every vertex's value goes to the
/// side whose nearest token is strictly closer. Equidistant or fully
/// unreachable vertices are awarded to neither side, matching the
/// territory scoring on [`crate::board::TokenBoard`]. Returns my score
/// minus the opponent's.
fn partition_differential(board: &dyn BoardView, mine: &[VertexId], theirs: &[VertexId]) -> f64 {
    let mut diff = 0.0;
    for v in board.vertices() {
        let best_mine = nearest(board, v, mine);
        let best_theirs = nearest(board, v, theirs);
        if best_mine < best_theirs {
            diff += board.value(v);
        } else if best_theirs < best_mine {
            diff -= board.value(v);
        }
    }
    diff
}

/// Distance from `v` to the nearest token in `tokens`.
fn nearest(board: &dyn BoardView, v: VertexId, tokens: &[VertexId]) -> f64 {
    tokens
        .iter()
        .map(|&t| board.distance(v, t))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TokenBoard;
    use crate::graph::Graph;
    use std::collections::HashMap;

    /// Path graph 0-1-2-3-4 with unit weights.
    fn path_board(values: &[f64]) -> TokenBoard {
        let mut g = Graph::with_vertices(values.len());
        for i in 0..values.len() - 1 {
            g.add_edge(VertexId(i as u32), VertexId(i as u32 + 1), 1.0);
        }
        let table: HashMap<VertexId, f64> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (VertexId(i as u32), v))
            .collect();
        TokenBoard::from_parts(g, table)
    }

    #[test]
    fn partition_differential_awards_strictly_closer_vertices() {
        let board = path_board(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        // Token at 0 vs token at 4: vertex 2 is equidistant and counts
        // for neither, so the sides cancel exactly.
        let diff = partition_differential(&board, &[VertexId(0)], &[VertexId(4)]);
        assert_eq!(diff, 0.0);
        // Token at 1 vs token at 4: 0,1,2 against 3,4.
        let diff = partition_differential(&board, &[VertexId(1)], &[VertexId(4)]);
        assert_eq!(diff, 1.0);
    }

    #[test]
    fn unreachable_vertices_count_for_neither_side() {
        let mut g = Graph::with_vertices(2);
        g.add_edge(VertexId(0), VertexId(1), 1.0);
        let isolated = g.add_vertex();
        let board = TokenBoard::with_uniform_values(g, 1.0);
        let diff = partition_differential(&board, &[VertexId(0)], &[]);
        // both reachable vertices are mine, the isolated one is nobody's
        assert_eq!(diff, 2.0);
        let diff = partition_differential(&board, &[isolated], &[VertexId(0)]);
        assert_eq!(diff, 1.0 - 2.0);
    }

    #[test]
    fn fixed_seed_single_simulation_is_deterministic() {
        let mut board = path_board(&[3.0, 1.0, 5.0, 1.0, 2.0]);
        board.place_token(Player::One, VertexId(0));
        board.place_token(Player::Two, VertexId(4));

        let pick_once = MonteCarloStrategy::seeded(42)
            .with_simulations(1)
            .choose_vertex(&board, Player::One, 4);
        let pick_again = MonteCarloStrategy::seeded(42)
            .with_simulations(1)
            .choose_vertex(&board, Player::One, 4);
        assert_eq!(pick_once, pick_again);
        assert!(!board.has_token(pick_once));
    }

    #[test]
    fn endgame_takes_the_dominant_vertex() {
        // One placement left for each side; vertex 2 carries almost all
        // the value, so every rollout agrees it must be taken.
        let mut board = path_board(&[1.0, 1.0, 100.0, 1.0, 1.0]);
        board.place_token(Player::One, VertexId(0));
        board.place_token(Player::Two, VertexId(4));

        let mut strategy = MonteCarloStrategy::seeded(7).with_simulations(10);
        let pick = strategy.choose_vertex(&board, Player::One, 1);
        assert_eq!(pick, VertexId(2));
    }

    #[test]
    fn full_board_minus_one_returns_the_last_vertex() {
        let mut board = path_board(&[1.0, 1.0, 1.0]);
        board.place_token(Player::One, VertexId(0));
        board.place_token(Player::Two, VertexId(2));
        let mut strategy = MonteCarloStrategy::seeded(3);
        let pick = strategy.choose_vertex(&board, Player::One, 1);
        assert_eq!(pick, VertexId(1));
    }

    #[test]
    fn final_turn_rollouts_still_deal_the_opponents_reply() {
        // Two vertices, nearly all the value on vertex 1. On the last
        // turn (remaining_turns = 1) each rollout must still give the
        // opponent one reply: taking 1 scores +99, taking 0 scores -99.
        let mut g = Graph::with_vertices(2);
        g.add_edge(VertexId(0), VertexId(1), 1.0);
        let mut values = HashMap::new();
        values.insert(VertexId(0), 1.0);
        values.insert(VertexId(1), 100.0);
        let board = TokenBoard::from_parts(g, values);

        let mut strategy = MonteCarloStrategy::seeded(8).with_simulations(4);
        let pick = strategy.choose_vertex(&board, Player::One, 1);
        assert_eq!(pick, VertexId(1));
    }
}
