//! Match orchestration.
//!
//! Runs a full two-player game: alternating placements chosen by each
//! side's strategy, then a final Voronoi territory count. The driver owns
//! all game-state mutation; strategies only advise.

use serde::Serialize;

use crate::board::{Player, TokenBoard};
use crate::strategy::Strategy;

/// One placement in a finished match.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Placement {
    pub player: Player,
    pub vertex: u32,
    pub turn: u32,
}

/// The full record of a finished match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub turns_per_player: u32,
    pub placements: Vec<Placement>,
    pub scores: (f64, f64),
    pub winner: Option<Player>,
}

/// Plays a match of `turns_per_player` placements per side on `board`,
/// player one moving first each round.
///
/// Placement stops early if the board fills up. Progress is logged to
/// stderr unless `quiet` is set.
pub fn play_match(
    board: &mut TokenBoard,
    one: &mut dyn Strategy,
    two: &mut dyn Strategy,
    turns_per_player: u32,
    quiet: bool,
) -> MatchRecord {
    let mut placements = Vec::with_capacity(2 * turns_per_player as usize);
    let total_vertices = board.graph().vertex_count();

    'turns: for turn in 0..turns_per_player {
        // Picks still to come for each player, including this round's.
        let remaining = turns_per_player - turn;
        for player in Player::ALL {
            if board.token_count() >= total_vertices {
                break 'turns;
            }
            let strategy: &mut dyn Strategy = match player {
                Player::One => &mut *one,
                Player::Two => &mut *two,
            };
            let vertex = strategy.choose_vertex(board, player, remaining);
            let placed = board.place_token(player, vertex);
            debug_assert!(placed, "strategy returned an occupied vertex");
            if !quiet {
                eprintln!(
                    "turn {}: {:?} places on vertex {}",
                    turn + 1,
                    player,
                    vertex.0
                );
            }
            placements.push(Placement {
                player,
                vertex: vertex.0,
                turn: turn + 1,
            });
        }
    }

    let scores = board.territory_scores();
    let winner = if scores.0 > scores.1 {
        Some(Player::One)
    } else if scores.1 > scores.0 {
        Some(Player::Two)
    } else {
        None
    };
    if !quiet {
        eprintln!(
            "final territory: player one {:.1}, player two {:.1}",
            scores.0, scores.1
        );
    }

    MatchRecord {
        turns_per_player,
        placements,
        scores,
        winner,
    }
}
