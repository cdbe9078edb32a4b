//! One-ply greedy heuristics.
//!
//! Both variants score every unclaimed vertex by its own value plus a
//! filtered contribution from unclaimed neighbors, keep a running
//! maximum, and return the first vertex reaching it (ties go to the
//! earliest vertex in board enumeration order).

use crate::board::{BoardView, Player};
use crate::graph::VertexId;

use super::Strategy;

/// Neighbor edge-weight cutoff for [`NeighborGreedy`]. Unit-weight edges
/// pass; anything meaningfully longer does not.
const NEIGHBOR_DISTANCE_CUTOFF: f64 = 1.1;

/// Threshold greedy: score(v) = value(v) plus the full value of every
/// unclaimed neighbor whose connecting edge is within the cutoff.
/// Favors high-value vertices surrounded by high-value neighbors.
#[derive(Debug, Default)]
pub struct NeighborGreedy;

impl Strategy for NeighborGreedy {
    fn choose_vertex(
        &mut self,
        board: &dyn BoardView,
        _player: Player,
        _remaining_turns: u32,
    ) -> VertexId {
        let mut best: Option<VertexId> = None;
        let mut best_score = f64::NEG_INFINITY;

        for v in board.vertices() {
            if board.has_token(v) {
                continue;
            }
            let mut score = board.value(v);
            for (u, weight) in board.neighbors(v) {
                if !board.has_token(u) && weight <= NEIGHBOR_DISTANCE_CUTOFF {
                    score += board.value(u);
                }
            }
            if score > best_score {
                best_score = score;
                best = Some(v);
            }
        }

        best.expect("choose_vertex requires an unclaimed vertex")
    }
}

/// Inverse-distance, opponent-aware greedy: each unclaimed neighbor `u`
/// contributes value(u) / distance(v, u), but only when the opponent's
/// nearest existing token is no closer to `u` than `v` would be — a
/// neighbor the opponent already holds tighter is not worth counting.
#[derive(Debug, Default)]
pub struct ContestedGreedy;

impl ContestedGreedy {
    /// Distance from `u` to the nearest token owned by `opponent`, or
    /// infinity when the opponent has no reachable token.
    fn opponent_grip(board: &dyn BoardView, opponent: Player, u: VertexId) -> f64 {
        board
            .vertices()
            .into_iter()
            .filter(|&t| board.owner(t) == Some(opponent))
            .map(|t| board.distance(u, t))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Strategy for ContestedGreedy {
    fn choose_vertex(
        &mut self,
        board: &dyn BoardView,
        player: Player,
        _remaining_turns: u32,
    ) -> VertexId {
        let opponent = player.opponent();
        let mut best: Option<VertexId> = None;
        let mut best_score = f64::NEG_INFINITY;

        for v in board.vertices() {
            if board.has_token(v) {
                continue;
            }
            let mut score = board.value(v);
            for (u, weight) in board.neighbors(v) {
                if board.has_token(u) {
                    continue;
                }
                // Contestable: placing at v reaches u at least as fast as
                // the opponent's current best claim.
                if Self::opponent_grip(board, opponent, u) >= weight {
                    let dist = board.distance(v, u);
                    if dist > 0.0 && dist.is_finite() {
                        score += board.value(u) / dist;
                    }
                }
            }
            if score > best_score {
                best_score = score;
                best = Some(v);
            }
        }

        best.expect("choose_vertex requires an unclaimed vertex")
    }
}
