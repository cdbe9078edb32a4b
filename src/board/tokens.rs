//! Token board: graph + values + token ownership.
//!
//! Distance maps are computed per source on first use and memoized in an
//! `RwLock`-guarded cache, so concurrent read-only rollouts can share the
//! board. Every graph mutation goes through a wrapper here that clears
//! the cache; stale distances must never survive an edge or vertex
//! change.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rand::Rng;

use crate::graph::{EdgeId, Graph, VertexId};

use super::{BoardView, Player};

/// Authoritative game state for one match.
pub struct TokenBoard {
    graph: Graph,
    values: HashMap<VertexId, f64>,
    owners: HashMap<VertexId, Player>,
    dist_cache: RwLock<HashMap<VertexId, Arc<HashMap<VertexId, f64>>>>,
}

impl TokenBoard {
    /// Creates a board where every vertex has the same value.
    pub fn with_uniform_values(graph: Graph, value: f64) -> Self {
        let values = graph.vertex_ids().map(|v| (v, value)).collect();
        TokenBoard::from_parts(graph, values)
    }

    /// Creates a board with integer vertex values drawn uniformly from
    /// `1..=max_value`.
    pub fn with_random_values<R: Rng>(graph: Graph, max_value: u32, rng: &mut R) -> Self {
        let values = graph
            .vertex_ids()
            .map(|v| (v, rng.gen_range(1..=max_value) as f64))
            .collect();
        TokenBoard::from_parts(graph, values)
    }

    /// Creates a board from an explicit value table. Vertices missing
    /// from the table default to value 0.
    pub fn from_parts(graph: Graph, values: HashMap<VertexId, f64>) -> Self {
        debug_assert!(values.values().all(|&v| v >= 0.0));
        TokenBoard {
            graph,
            values,
            owners: HashMap::new(),
            dist_cache: RwLock::new(HashMap::new()),
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Places `player`'s token on `v`. Returns false (and changes
    /// nothing) if `v` already carries a token or is not a live vertex.
    pub fn place_token(&mut self, player: Player, v: VertexId) -> bool {
        if !self.graph.contains_vertex(v) || self.owners.contains_key(&v) {
            return false;
        }
        self.owners.insert(v, player);
        true
    }

    /// Number of tokens on the board.
    pub fn token_count(&self) -> usize {
        self.owners.len()
    }

    /// Adds a vertex with the given value.
    pub fn add_vertex(&mut self, value: f64) -> VertexId {
        let v = self.graph.add_vertex();
        self.values.insert(v, value);
        self.invalidate_distances();
        v
    }

    /// Adds an edge, invalidating memoized distances.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> EdgeId {
        let e = self.graph.add_edge(u, v, weight);
        self.invalidate_distances();
        e
    }

    /// Removes an edge, invalidating memoized distances on success.
    pub fn remove_edge(&mut self, e: EdgeId) -> bool {
        let removed = self.graph.remove_edge(e);
        if removed {
            self.invalidate_distances();
        }
        removed
    }

    /// Removes a vertex along with its value, token, and memoized
    /// distances.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        let removed = self.graph.remove_vertex(v);
        if removed {
            self.values.remove(&v);
            self.owners.remove(&v);
            self.invalidate_distances();
        }
        removed
    }

    fn invalidate_distances(&mut self) {
        self.dist_cache
            .write()
            .expect("distance cache lock poisoned")
            .clear();
    }

    /// Returns the memoized distance map from `source`, computing it on
    /// first use.
    fn distances(&self, source: VertexId) -> Arc<HashMap<VertexId, f64>> {
        if let Some(map) = self
            .dist_cache
            .read()
            .expect("distance cache lock poisoned")
            .get(&source)
        {
            return Arc::clone(map);
        }
        let map = Arc::new(self.graph.distance_from(source));
        self.dist_cache
            .write()
            .expect("distance cache lock poisoned")
            .entry(source)
            .or_insert(map)
            .clone()
    }

    /// Final Voronoi territory scores as `(player one, player two)`.
    ///
    /// Each vertex's value goes to the player whose nearest token is
    /// strictly closer. A vertex exactly equidistant from both sides, or
    /// unreachable from every token, is awarded to neither.
    pub fn territory_scores(&self) -> (f64, f64) {
        let mut scores = (0.0, 0.0);
        for v in self.graph.vertex_ids() {
            let mut best: [f64; 2] = [f64::INFINITY; 2];
            for (&token, &owner) in &self.owners {
                let d = self.distance(v, token);
                let side = match owner {
                    Player::One => 0,
                    Player::Two => 1,
                };
                if d < best[side] {
                    best[side] = d;
                }
            }
            if best[0] < best[1] {
                scores.0 += self.value(v);
            } else if best[1] < best[0] {
                scores.1 += self.value(v);
            }
        }
        scores
    }
}

impl BoardView for TokenBoard {
    fn vertices(&self) -> Vec<VertexId> {
        self.graph.vertex_ids().collect()
    }

    fn neighbors(&self, v: VertexId) -> Vec<(VertexId, f64)> {
        self.graph.neighbors(v).collect()
    }

    fn has_token(&self, v: VertexId) -> bool {
        self.owners.contains_key(&v)
    }

    fn owner(&self, v: VertexId) -> Option<Player> {
        self.owners.get(&v).copied()
    }

    fn closest_token(&self, v: VertexId) -> Option<VertexId> {
        let dist = self.distances(v);
        let mut best: Option<(VertexId, f64)> = None;
        for &token in self.owners.keys() {
            let d = dist.get(&token).copied().unwrap_or(f64::INFINITY);
            if !d.is_finite() {
                continue;
            }
            // Equidistant tokens resolve to the lowest vertex id, so the
            // answer does not depend on owner-table iteration order.
            match best {
                Some((bt, bd)) if bd < d || (bd == d && bt < token) => {}
                _ => best = Some((token, d)),
            }
        }
        best.map(|(token, _)| token)
    }

    fn value(&self, v: VertexId) -> f64 {
        self.values.get(&v).copied().unwrap_or(0.0)
    }

    fn distance(&self, a: VertexId, b: VertexId) -> f64 {
        self.distances(a)
            .get(&b)
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path graph 0-1-2-3 with unit weights and uniform values.
    fn path_board() -> TokenBoard {
        let mut g = Graph::with_vertices(4);
        for i in 0..3u32 {
            g.add_edge(VertexId(i), VertexId(i + 1), 1.0);
        }
        TokenBoard::with_uniform_values(g, 1.0)
    }

    #[test]
    fn place_token_rejects_occupied_vertex() {
        let mut board = path_board();
        assert!(board.place_token(Player::One, VertexId(0)));
        assert!(!board.place_token(Player::Two, VertexId(0)));
        assert_eq!(board.owner(VertexId(0)), Some(Player::One));
        assert_eq!(board.token_count(), 1);
    }

    #[test]
    fn closest_token_tracks_graph_distance() {
        let mut board = path_board();
        board.place_token(Player::One, VertexId(0));
        board.place_token(Player::Two, VertexId(3));
        assert_eq!(board.closest_token(VertexId(1)), Some(VertexId(0)));
        assert_eq!(board.closest_token(VertexId(2)), Some(VertexId(3)));
    }

    #[test]
    fn closest_token_ties_resolve_to_lowest_vertex_id() {
        let mut g = Graph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), 1.0);
        g.add_edge(VertexId(1), VertexId(2), 1.0);
        let mut board = TokenBoard::with_uniform_values(g, 1.0);
        board.place_token(Player::Two, VertexId(2));
        board.place_token(Player::One, VertexId(0));
        // vertex 1 is exactly 1.0 from each token
        assert_eq!(board.closest_token(VertexId(1)), Some(VertexId(0)));
    }

    #[test]
    fn closest_token_is_none_without_reachable_tokens() {
        let mut board = path_board();
        assert_eq!(board.closest_token(VertexId(1)), None);
        let isolated = board.add_vertex(1.0);
        board.place_token(Player::One, VertexId(0));
        assert_eq!(board.closest_token(isolated), None);
    }

    #[test]
    fn territory_split_awards_strictly_closer_vertices() {
        let mut board = path_board();
        board.place_token(Player::One, VertexId(0));
        board.place_token(Player::Two, VertexId(3));
        // 0,1 belong to One; 2,3 to Two.
        assert_eq!(board.territory_scores(), (2.0, 2.0));
    }

    #[test]
    fn equidistant_vertex_counts_for_neither() {
        let mut g = Graph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), 1.0);
        g.add_edge(VertexId(1), VertexId(2), 1.0);
        let mut board = TokenBoard::with_uniform_values(g, 1.0);
        board.place_token(Player::One, VertexId(0));
        board.place_token(Player::Two, VertexId(2));
        // vertex 1 is exactly 1.0 from each token
        assert_eq!(board.territory_scores(), (1.0, 1.0));
    }

    #[test]
    fn mutation_invalidates_memoized_distances() {
        let mut board = path_board();
        assert_eq!(board.distance(VertexId(0), VertexId(2)), 2.0);
        board.add_edge(VertexId(0), VertexId(2), 0.5);
        assert_eq!(board.distance(VertexId(0), VertexId(2)), 0.5);
        let shortcut = board.graph().edge_between(VertexId(0), VertexId(2)).unwrap();
        assert!(board.remove_edge(shortcut));
        assert_eq!(board.distance(VertexId(0), VertexId(2)), 2.0);
    }

    #[test]
    fn remove_vertex_drops_its_token_and_value() {
        let mut board = path_board();
        board.place_token(Player::One, VertexId(1));
        assert!(board.remove_vertex(VertexId(1)));
        assert!(!board.has_token(VertexId(1)));
        assert_eq!(board.value(VertexId(1)), 0.0);
        assert!(board.distance(VertexId(0), VertexId(2)).is_infinite());
    }
}
