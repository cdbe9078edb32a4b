//! Placement strategies.
//!
//! Each strategy answers one question: given the current board, where
//! should the active player put the next token? Strategies are advisory
//! and never mutate game state; the driver applies the returned
//! placement.

pub mod greedy;
pub mod monte_carlo;
pub mod random;

pub use greedy::{ContestedGreedy, NeighborGreedy};
pub use monte_carlo::MonteCarloStrategy;
pub use random::RandomStrategy;

use crate::board::{BoardView, Player};
use crate::graph::VertexId;

/// The single capability a game driver needs from a player.
///
/// Precondition: at least one tokenless vertex exists; callers must not
/// invoke this on a full board.
pub trait Strategy {
    /// Picks the vertex for this player's next token. `remaining_turns`
    /// counts this player's picks still to come, including this one.
    fn choose_vertex(
        &mut self,
        board: &dyn BoardView,
        player: Player,
        remaining_turns: u32,
    ) -> VertexId;
}

/// Splits the placed tokens into `(player's own, opponent's)` sets, in
/// board enumeration order.
pub(crate) fn token_sets(board: &dyn BoardView, player: Player) -> (Vec<VertexId>, Vec<VertexId>) {
    let mut mine = Vec::new();
    let mut theirs = Vec::new();
    for v in board.vertices() {
        match board.owner(v) {
            Some(owner) if owner == player => mine.push(v),
            Some(_) => theirs.push(v),
            None => {}
        }
    }
    (mine, theirs)
}

/// All tokenless vertices, in board enumeration order.
pub(crate) fn unclaimed_vertices(board: &dyn BoardView) -> Vec<VertexId> {
    board
        .vertices()
        .into_iter()
        .filter(|&v| !board.has_token(v))
        .collect()
}
