//! Vertex/edge arena.
//!
//! Vertices and edges live in slot vectors addressed by stable `VertexId`
//! and `EdgeId` indices; removal tombstones a slot instead of shifting, so
//! ids held elsewhere stay valid. Edges store endpoint ids and vertices
//! store incident-edge ids, which sidesteps cyclic ownership between the
//! two. Invariant maintained by every mutation: an edge appears in both
//! endpoints' incident lists, or in neither.

use rand::Rng;

/// Stable index of a vertex within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the raw slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable index of an edge within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Returns the raw slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex: identity plus its incident-edge list.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    incident: Vec<EdgeId>,
}

/// An undirected edge: an unordered endpoint pair and an immutable
/// non-negative weight.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    endpoints: [VertexId; 2],
    weight: f64,
}

impl Edge {
    /// Returns both endpoints.
    #[inline]
    pub fn endpoints(&self) -> [VertexId; 2] {
        self.endpoints
    }

    /// Returns the edge weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the endpoint that is not `x`, or `None` if `x` is not an
    /// endpoint of this edge.
    #[inline]
    pub fn other(&self, x: VertexId) -> Option<VertexId> {
        let [u, v] = self.endpoints;
        if x == u {
            Some(v)
        } else if x == v {
            Some(u)
        } else {
            None
        }
    }
}

/// Weighted undirected graph owning its vertices and edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Option<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        Graph {
            vertices: (0..n).map(|_| Some(Vertex::default())).collect(),
            edges: Vec::new(),
        }
    }

    /// Creates a random graph on `n` vertices: every unordered pair gets a
    /// weight-1 edge independently with probability `p`. Expected edge
    /// count is `p * n * (n - 1) / 2`.
    pub fn random<R: Rng>(n: usize, p: f64, rng: &mut R) -> Self {
        let mut g = Graph::with_vertices(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen::<f64>() < p {
                    g.add_edge(VertexId(i as u32), VertexId(j as u32), 1.0);
                }
            }
        }
        g
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|s| s.is_some()).count()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if `v` is a live vertex of this graph.
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices
            .get(v.index())
            .map_or(false, |slot| slot.is_some())
    }

    /// Returns true if `e` is a live edge of this graph.
    #[inline]
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edges
            .get(e.index())
            .map_or(false, |slot| slot.is_some())
    }

    /// Iterates over live vertex ids in slot order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId(i as u32)))
    }

    /// Iterates over live edge ids in slot order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| EdgeId(i as u32)))
    }

    /// Returns the edge record for a live edge id.
    #[inline]
    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.index()).and_then(|slot| slot.as_ref())
    }

    /// Returns the incident-edge list of a live vertex.
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        match self.vertices.get(v.index()).and_then(|s| s.as_ref()) {
            Some(vertex) => &vertex.incident,
            None => &[],
        }
    }

    /// Iterates over `v`'s neighbors as `(neighbor, edge weight)` pairs.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.incident_edges(v).iter().filter_map(move |&eid| {
            let edge = self.edge(eid)?;
            Some((edge.other(v)?, edge.weight()))
        })
    }

    /// Adds an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Some(Vertex::default()));
        id
    }

    /// Adds an edge between two distinct live vertices.
    ///
    /// Preconditions: `u != v`, `weight >= 0`, both vertices live.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> EdgeId {
        debug_assert_ne!(u, v, "self-loops are not allowed");
        debug_assert!(weight >= 0.0, "edge weight must be non-negative");
        debug_assert!(self.contains_vertex(u) && self.contains_vertex(v));

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(Edge {
            endpoints: [u, v],
            weight,
        }));
        self.vertices[u.index()]
            .as_mut()
            .expect("endpoint checked live")
            .incident
            .push(id);
        self.vertices[v.index()]
            .as_mut()
            .expect("endpoint checked live")
            .incident
            .push(id);
        id
    }

    /// Returns the edge connecting `u` and `v`, if any. Scans `u`'s
    /// incident list, so this is O(degree(u)).
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.incident_edges(u)
            .iter()
            .copied()
            .find(|&eid| self.edge(eid).and_then(|e| e.other(u)) == Some(v))
    }

    /// Removes a vertex and every edge incident to it. Returns false if
    /// the vertex is not a member.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.contains_vertex(v) {
            return false;
        }
        let incident: Vec<EdgeId> = self.incident_edges(v).to_vec();
        for eid in incident {
            self.remove_edge(eid);
        }
        self.vertices[v.index()] = None;
        true
    }

    /// Removes an edge, detaching it from both endpoints. Returns false
    /// if the edge is not a member.
    pub fn remove_edge(&mut self, e: EdgeId) -> bool {
        let edge = match self.edges.get(e.index()).and_then(|s| *s) {
            Some(edge) => edge,
            None => return false,
        };
        for endpoint in edge.endpoints() {
            if let Some(vertex) = self.vertices[endpoint.index()].as_mut() {
                vertex.incident.retain(|&eid| eid != e);
            }
        }
        self.edges[e.index()] = None;
        true
    }
}
