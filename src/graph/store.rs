//! In-memory graph storage implementation
//!
//! The graph owns every vertex in an arena keyed by [`VertexId`] and keeps
//! the edge list and the per-vertex neighbor lists in lockstep:
//! - every edge endpoint is a live vertex
//! - a vertex lists `t` as a neighbor iff some edge runs from it to `t`
//! - no vertex handle appears twice in the vertex collection

use super::edge::{Edge, EdgeSpec};
use super::options::EdgeOptions;
use super::types::{Label, VertexId};
use super::vertex::Vertex;
use crate::config::GraphConfig;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Invalid edge: source vertex {0} does not exist")]
    InvalidEdgeSource(VertexId),

    #[error("Invalid edge: target vertex {0} does not exist")]
    InvalidEdgeTarget(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph statistics snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub weighted_edge_count: usize,
    /// Mean neighbor-list length over all vertices
    pub avg_out_degree: f64,
}

/// In-memory graph
///
/// Storage layout:
/// - vertices: VertexId -> Vertex, iterated in collection order
/// - generations: per-slot generation, bumped when a slot is vacated
/// - free_slots: vacated slots awaiting reuse
/// - edges: directed edge records in creation order
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex, FxBuildHasher>,
    generations: Vec<u32>,
    free_slots: Vec<u32>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph owning `vertices`, with no edges
    ///
    /// Handles are assigned in iteration order; read them back with
    /// [`vertex_ids`](Self::vertex_ids).
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self::with_config(&GraphConfig::default(), vertices)
    }

    /// Create a graph with explicit capacity settings
    pub fn with_config(config: &GraphConfig, vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut graph = Graph {
            vertices: IndexMap::with_capacity_and_hasher(config.vertex_capacity, FxBuildHasher),
            generations: Vec::with_capacity(config.vertex_capacity),
            free_slots: Vec::new(),
            edges: Vec::with_capacity(config.edge_capacity),
        };
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        debug!("Created graph with {} vertices", graph.vertex_count());
        graph
    }

    /// Take ownership of a vertex and return its handle
    ///
    /// Any neighbor entries the vertex carried are discarded, since no edge
    /// backs them in this graph.
    pub fn add_vertex(&mut self, mut vertex: Vertex) -> VertexId {
        vertex.clear_neighbors();
        let id = match self.free_slots.pop() {
            Some(index) => VertexId::new(index, self.generations[index as usize]),
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                VertexId::new(index, 0)
            }
        };
        trace!("Added vertex {} ({})", id, vertex.label());
        self.vertices.insert(id, vertex);
        id
    }

    /// Add an edge from `source` to `target`
    ///
    /// With `options.bidirectional` the reverse record and reverse neighbor
    /// entry are added as well, sharing the weight. Both endpoints must be
    /// live vertices of this graph; otherwise nothing is changed.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        options: EdgeOptions,
    ) -> GraphResult<()> {
        self.check_source(source)?;
        self.check_target(target)?;
        self.insert_edge(source, target, options);
        Ok(())
    }

    /// Add one edge from `source` per [`EdgeSpec`], in order
    ///
    /// Every endpoint is validated before the first edge is written, so a
    /// rejected batch leaves the graph untouched.
    pub fn add_edges<I, S>(&mut self, source: VertexId, specs: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<EdgeSpec>,
    {
        let specs: Vec<EdgeSpec> = specs.into_iter().map(Into::into).collect();

        self.check_source(source)?;
        for spec in &specs {
            self.check_target(spec.target)?;
        }

        for spec in specs {
            self.insert_edge(source, spec.target, spec.options);
        }
        Ok(())
    }

    /// Remove a vertex and every reference to it
    ///
    /// Drops each edge with the vertex at either end and purges the vertex
    /// from all remaining neighbor lists. Returns `None` if the handle is not
    /// live, in which case the graph is unchanged.
    pub fn remove_node(&mut self, id: VertexId) -> Option<Vertex> {
        let removed = self.vertices.shift_remove(&id);

        let edges_before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        let dropped_edges = edges_before - self.edges.len();

        let purged: usize = self
            .vertices
            .values_mut()
            .map(|vertex| vertex.remove_all_neighbor(id))
            .sum();

        if removed.is_some() {
            self.release_slot(id);
            debug!(
                "Removed vertex {}: dropped {} edges, purged {} neighbor entries",
                id, dropped_edges, purged
            );
        }

        removed
    }

    /// Get a vertex by handle
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Check if a vertex is live in this graph
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Vertex handles in collection order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Vertices with their handles, in collection order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().map(|(&id, vertex)| (id, vertex))
    }

    /// All edge records in creation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge records leaving a vertex, in creation order
    pub fn outgoing_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.starts_from(id))
    }

    /// Neighbor list of a vertex
    pub fn neighbors(&self, id: VertexId) -> Option<&[VertexId]> {
        self.vertex(id).map(Vertex::neighbors)
    }

    /// All vertices carrying `label`, in collection order
    pub fn find_by_label(&self, label: &str) -> Vec<VertexId> {
        self.vertices()
            .filter(|(_, vertex)| vertex.label().as_str() == label)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let neighbor_entries: usize = self.vertices.values().map(Vertex::degree).sum();
        let avg_out_degree = if vertex_count == 0 {
            0.0
        } else {
            neighbor_entries as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count: self.edge_count(),
            weighted_edge_count: self.edges.iter().filter(|e| e.weight().is_some()).count(),
            avg_out_degree,
        }
    }

    /// Adjacency dump: each vertex label with its neighbor labels, in
    /// collection order
    pub fn adjacency(&self) -> Vec<(Label, Vec<Label>)> {
        self.vertices
            .values()
            .map(|vertex| {
                let neighbors = vertex
                    .neighbors()
                    .iter()
                    .filter_map(|n| self.vertices.get(n))
                    .map(|n| n.label().clone())
                    .collect();
                (vertex.label().clone(), neighbors)
            })
            .collect()
    }

    /// Remove all vertices and edges
    ///
    /// Handles issued before the call become stale.
    pub fn clear(&mut self) {
        let ids: Vec<VertexId> = self.vertex_ids().collect();
        for id in ids {
            self.release_slot(id);
        }
        self.vertices.clear();
        self.edges.clear();
        debug!("Cleared graph");
    }

    fn check_source(&self, source: VertexId) -> GraphResult<()> {
        if !self.contains_vertex(source) {
            warn!("Rejected edge: source {} is not in the graph", source);
            return Err(GraphError::InvalidEdgeSource(source));
        }
        Ok(())
    }

    fn check_target(&self, target: VertexId) -> GraphResult<()> {
        if !self.contains_vertex(target) {
            warn!("Rejected edge: target {} is not in the graph", target);
            return Err(GraphError::InvalidEdgeTarget(target));
        }
        Ok(())
    }

    /// Endpoints must already be validated
    fn insert_edge(&mut self, source: VertexId, target: VertexId, options: EdgeOptions) {
        self.link(source, target, options.weight);
        if options.bidirectional {
            self.link(target, source, options.weight);
        }
    }

    fn link(&mut self, source: VertexId, target: VertexId, weight: Option<i64>) {
        self.edges.push(Edge::new(source, target, weight));
        if let Some(vertex) = self.vertices.get_mut(&source) {
            vertex.add_neighbor(target);
        }
        trace!("Added edge {} -> {} (weight {:?})", source, target, weight);
    }

    fn release_slot(&mut self, id: VertexId) {
        let generation = &mut self.generations[id.index()];
        *generation = generation.wrapping_add(1);
        self.free_slots.push(id.index() as u32);
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, neighbors) in self.adjacency() {
            let names: Vec<&str> = neighbors.iter().map(Label::as_str).collect();
            writeln!(f, "{}: [{}]", label, names.join(", "))?;
        }
        Ok(())
    }
}
