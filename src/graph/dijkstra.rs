//! Single-source shortest-path distances.
//!
//! Dijkstra over non-negative edge weights with a lazy-deletion binary
//! heap: an improved tentative distance pushes a fresh heap entry and
//! stale entries are skipped on pop. Ties between equal tentative
//! distances are broken in unspecified order, which is harmless for
//! correctness with non-negative weights.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::structure::{Graph, VertexId};

/// Min-heap entry ordered by distance. `f64` weights never hold NaN here
/// (loaded and constructed weights are finite and non-negative), so
/// `total_cmp` gives a sound ordering.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    dist: f64,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest distance first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl Graph {
    /// Computes the shortest-path distance from `source` to every vertex.
    ///
    /// Every live vertex appears in the returned map; vertices with no
    /// path from `source` map to `f64::INFINITY`. An edgeless graph
    /// therefore yields infinity for every non-source vertex.
    pub fn distance_from(&self, source: VertexId) -> HashMap<VertexId, f64> {
        let mut dist: HashMap<VertexId, f64> = self
            .vertex_ids()
            .map(|v| (v, if v == source { 0.0 } else { f64::INFINITY }))
            .collect();

        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry {
            dist: 0.0,
            vertex: source,
        });

        while let Some(HeapEntry { dist: d, vertex: u }) = heap.pop() {
            // Stale entry: a shorter path to `u` was already finalized.
            if d > dist.get(&u).copied().unwrap_or(f64::INFINITY) {
                continue;
            }
            for (v, w) in self.neighbors(u) {
                let alt = d + w;
                if alt < dist[&v] {
                    dist.insert(v, alt);
                    heap.push(HeapEntry { dist: alt, vertex: v });
                }
            }
        }

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_distance_is_zero() {
        let g = Graph::with_vertices(5);
        let dist = g.distance_from(VertexId(0));
        assert_eq!(dist[&VertexId(0)], 0.0);
    }

    #[test]
    fn edgeless_graph_leaves_everything_unreachable() {
        let g = Graph::with_vertices(4);
        let dist = g.distance_from(VertexId(2));
        for v in g.vertex_ids() {
            if v == VertexId(2) {
                assert_eq!(dist[&v], 0.0);
            } else {
                assert!(dist[&v].is_infinite());
            }
        }
    }

    #[test]
    fn direct_edge_bounds_shortest_path() {
        let mut g = Graph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), 4.0);
        g.add_edge(VertexId(1), VertexId(2), 1.0);
        g.add_edge(VertexId(0), VertexId(2), 10.0);
        let dist = g.distance_from(VertexId(0));
        // never longer than the direct edge
        assert!(dist[&VertexId(2)] <= 10.0);
        // and the two-hop route wins here
        assert_eq!(dist[&VertexId(2)], 5.0);
    }

    #[test]
    fn disconnected_component_stays_infinite() {
        let mut g = Graph::with_vertices(4);
        g.add_edge(VertexId(0), VertexId(1), 1.0);
        g.add_edge(VertexId(2), VertexId(3), 1.0);
        let dist = g.distance_from(VertexId(0));
        assert_eq!(dist[&VertexId(1)], 1.0);
        assert!(dist[&VertexId(2)].is_infinite());
        assert!(dist[&VertexId(3)].is_infinite());
    }

    #[test]
    fn zero_weight_edges_are_free() {
        let mut g = Graph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), 0.0);
        g.add_edge(VertexId(1), VertexId(2), 2.5);
        let dist = g.distance_from(VertexId(0));
        assert_eq!(dist[&VertexId(1)], 0.0);
        assert_eq!(dist[&VertexId(2)], 2.5);
    }

    #[test]
    fn distances_ignore_removed_vertices() {
        let mut g = Graph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), 1.0);
        g.add_edge(VertexId(1), VertexId(2), 1.0);
        g.remove_vertex(VertexId(1));
        let dist = g.distance_from(VertexId(0));
        assert_eq!(dist.len(), 2);
        assert!(dist[&VertexId(2)].is_infinite());
    }
}
