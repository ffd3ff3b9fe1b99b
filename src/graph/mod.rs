//! Core graph implementation
//!
//! This module implements the adjacency-list graph model with:
//! - Vertices identified by handle, each carrying a label and an ordered
//!   neighbor list
//! - Directed edge records with an optional integer weight
//! - Undirected relationships stored as a pair of reversed edge records
//! - Removal that cascades through the vertex, edge and neighbor collections

pub mod edge;
pub mod options;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::{Edge, EdgeSpec};
pub use options::EdgeOptions;
pub use store::{Graph, GraphError, GraphResult, GraphStatistics};
pub use types::{Label, VertexId};
pub use vertex::Vertex;
