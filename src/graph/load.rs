//! Edge-list graph loading.
//!
//! Format: the first line ends in `": <vertexCount>"`, the second line is
//! a header and is skipped, and every following non-empty line is one
//! edge as `"<startIndex>,<endIndex>"` with 0-based endpoints and an
//! implied unit weight.
//!
//! Parsing is all-or-nothing: any malformed line produces an error and no
//! graph, so a loader failure can never hand the caller a graph with a
//! broken vertex/edge invariant.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::structure::{Graph, VertexId};

/// Errors that can occur while loading an edge-list file.
#[derive(Debug, thiserror::Error)]
pub enum GraphLoadError {
    #[error("i/o error reading graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing vertex-count line")]
    MissingVertexCount,

    #[error("invalid vertex count: '{0}'")]
    InvalidVertexCount(String),

    #[error("malformed edge on line {line}: '{text}'")]
    MalformedEdge { line: usize, text: String },

    #[error("edge endpoint {index} out of range on line {line} (graph has {count} vertices)")]
    EndpointOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },
}

/// Loads a graph from an edge-list file.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, GraphLoadError> {
    let file = File::open(path)?;
    parse_graph(BufReader::new(file))
}

/// Parses a graph from any buffered reader in the edge-list format.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph, GraphLoadError> {
    let mut lines = reader.lines();

    let count_line = lines
        .next()
        .transpose()?
        .ok_or(GraphLoadError::MissingVertexCount)?;
    let count = parse_vertex_count(&count_line)?;
    let mut graph = Graph::with_vertices(count);

    // Header line: present but unused.
    let _ = lines.next().transpose()?;

    // Edge lines start at line 3 of the file.
    for (offset, line) in lines.enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let line_no = offset + 3;
        let (start, end) = parse_edge(text, line_no)?;
        // Self-loops would break the graph's no-self-loop invariant.
        if start == end {
            return Err(GraphLoadError::MalformedEdge {
                line: line_no,
                text: text.to_string(),
            });
        }
        for index in [start, end] {
            if index >= count {
                return Err(GraphLoadError::EndpointOutOfRange {
                    line: line_no,
                    index,
                    count,
                });
            }
        }
        graph.add_edge(VertexId(start as u32), VertexId(end as u32), 1.0);
    }

    Ok(graph)
}

/// Parses the `"...: <vertexCount>"` first line.
fn parse_vertex_count(line: &str) -> Result<usize, GraphLoadError> {
    let raw = line
        .rsplit(": ")
        .next()
        .ok_or_else(|| GraphLoadError::InvalidVertexCount(line.to_string()))?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| GraphLoadError::InvalidVertexCount(line.to_string()))
}

/// Parses one `"<start>,<end>"` edge line.
fn parse_edge(text: &str, line_no: usize) -> Result<(usize, usize), GraphLoadError> {
    let malformed = || GraphLoadError::MalformedEdge {
        line: line_no,
        text: text.to_string(),
    };
    let (a, b) = text.split_once(',').ok_or_else(malformed)?;
    let start = a.trim().parse::<usize>().map_err(|_| malformed())?;
    let end = b.trim().parse::<usize>().map_err(|_| malformed())?;
    Ok((start, end))
}
