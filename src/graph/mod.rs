//! Weighted undirected graph engine.
//!
//! Contains the vertex/edge arena, single-source shortest-path distances,
//! and edge-list file loading.

pub mod dijkstra;
pub mod load;
pub mod structure;

pub use load::{load_graph, parse_graph, GraphLoadError};
pub use structure::{Edge, EdgeId, Graph, Vertex, VertexId};
