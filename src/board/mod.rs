//! Board representation and game-state types.
//!
//! The board owns the graph plus the per-vertex value and token-owner
//! tables, and exposes the read-only query surface the strategies decide
//! against.

pub mod tokens;

pub use tokens::TokenBoard;

use crate::graph::VertexId;

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];
}

/// Read-only game-state queries available to a strategy during a
/// decision.
///
/// `Sync` is a supertrait so a `&dyn BoardView` can be shared across
/// rayon workers during Monte-Carlo rollouts.
pub trait BoardView: Sync {
    /// Every live vertex, in the board's stable enumeration order.
    fn vertices(&self) -> Vec<VertexId>;

    /// `v`'s neighbors with the connecting edge weights.
    fn neighbors(&self, v: VertexId) -> Vec<(VertexId, f64)>;

    /// True if a token has been placed on `v`.
    fn has_token(&self, v: VertexId) -> bool;

    /// The player owning the token on `v`, if any.
    fn owner(&self, v: VertexId) -> Option<Player>;

    /// The nearest placed token to `v` under graph distances, or `None`
    /// when no token is reachable from `v`.
    fn closest_token(&self, v: VertexId) -> Option<VertexId>;

    /// `v`'s intrinsic (non-negative) value.
    fn value(&self, v: VertexId) -> f64;

    /// Shortest-path distance between two vertices; `f64::INFINITY` when
    /// unreachable.
    fn distance(&self, a: VertexId, b: VertexId) -> f64;
}
