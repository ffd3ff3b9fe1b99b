//! Edge implementation
//!
//! Edges are always directed records. An undirected relationship is stored
//! as two records with swapped endpoints and the same weight.

use super::options::EdgeOptions;
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// A directed edge owned by a [`Graph`](super::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    target: VertexId,

    /// Optional weight, fixed at creation
    weight: Option<i64>,
}

impl Edge {
    /// Only the graph creates edges, so both endpoints are known members
    pub(crate) fn new(source: VertexId, target: VertexId, weight: Option<i64>) -> Self {
        Edge { source, target, weight }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn weight(&self) -> Option<i64> {
        self.weight
    }

    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: VertexId) -> bool {
        self.source == vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: VertexId) -> bool {
        self.target == vertex
    }

    /// Check if either endpoint is `vertex`
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.starts_from(vertex) || self.ends_at(vertex)
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// One entry of a batch passed to [`Graph::add_edges`](super::Graph::add_edges)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub target: VertexId,
    pub options: EdgeOptions,
}

impl EdgeSpec {
    pub fn new(target: VertexId, options: EdgeOptions) -> Self {
        Self { target, options }
    }
}

impl From<(VertexId, bool, Option<i64>)> for EdgeSpec {
    fn from((target, bidirectional, weight): (VertexId, bool, Option<i64>)) -> Self {
        Self::new(target, EdgeOptions::new(bidirectional, weight))
    }
}

impl From<(VertexId, EdgeOptions)> for EdgeSpec {
    fn from((target, options): (VertexId, EdgeOptions)) -> Self {
        Self::new(target, options)
    }
}
