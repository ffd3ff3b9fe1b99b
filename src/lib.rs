//! adjgraph
//!
//! An in-memory adjacency-list graph: vertices with ordered neighbor lists,
//! directed edge records with optional integer weights, and per-edge
//! bidirectionality.
//!
//! # Model
//!
//! - The [`Graph`] owns its vertices and hands out [`VertexId`] handles.
//!   Handles, not labels, identify vertices; two vertices may share a label.
//! - Every edge is stored as a directed [`Edge`]. Adding a bidirectional edge
//!   stores the forward and the reverse record with the same weight.
//! - Each vertex's neighbor list mirrors its outgoing edges, duplicates
//!   included, and every mutator keeps the two in step.
//! - [`Graph::remove_node`] drops the vertex, every edge touching it, and
//!   every neighbor entry pointing at it.
//!
//! ## Example Usage
//!
//! ```rust
//! use adjgraph::{EdgeOptions, Graph, Vertex};
//!
//! let mut graph = Graph::new(vec![
//!     Vertex::new("Atlanta"),
//!     Vertex::new("New York"),
//!     Vertex::new("Chicago"),
//! ]);
//! let ids: Vec<_> = graph.vertex_ids().collect();
//! let (atlanta, new_york, chicago) = (ids[0], ids[1], ids[2]);
//!
//! graph.add_edge(atlanta, new_york, EdgeOptions::directed().with_weight(250)).unwrap();
//! graph.add_edge(new_york, chicago, EdgeOptions::undirected().with_weight(190)).unwrap();
//! assert_eq!(graph.edge_count(), 3);
//!
//! graph.remove_node(new_york);
//! assert_eq!(graph.edge_count(), 0);
//! assert!(graph.neighbors(atlanta).unwrap().is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use config::{ConfigError, GraphConfig};
pub use graph::{
    Edge, EdgeOptions, EdgeSpec, Graph, GraphError, GraphResult, GraphStatistics, Label, Vertex,
    VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
