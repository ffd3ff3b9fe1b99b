//! Vertex implementation
//!
//! A vertex carries a label and its ordered list of outgoing neighbors.
//! Neighbor entries are handles into the owning graph, never owned vertices.

use super::types::{Label, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex in the graph
///
/// The neighbor list keeps insertion order and permits duplicates, one entry
/// per parallel edge. `Vertex` has no `PartialEq`: identity belongs to the
/// [`VertexId`] the graph hands out, not to the label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Descriptive label
    label: Label,

    /// Outgoing neighbors in insertion order
    neighbors: Vec<VertexId>,
}

impl Vertex {
    /// Create a new vertex with an empty neighbor list
    pub fn new(label: impl Into<Label>) -> Self {
        Vertex {
            label: label.into(),
            neighbors: Vec::new(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Number of neighbor entries, duplicates included
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains(&id)
    }

    /// Append a neighbor unconditionally
    pub fn add_neighbor(&mut self, id: VertexId) {
        self.neighbors.push(id);
    }

    /// Remove the first occurrence of `id`
    ///
    /// Later duplicates are left in place. Returns `false` if `id` was not a
    /// neighbor.
    pub fn remove_neighbor(&mut self, id: VertexId) -> bool {
        match self.neighbors.iter().position(|&n| n == id) {
            Some(pos) => {
                self.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `id`, returning how many were dropped
    pub fn remove_all_neighbor(&mut self, id: VertexId) -> usize {
        let before = self.neighbors.len();
        self.neighbors.retain(|&n| n != id);
        before - self.neighbors.len()
    }

    /// Drop all neighbor entries; a vertex enters a graph with none
    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: u32) -> VertexId {
        VertexId::new(index, 0)
    }

    #[test]
    fn test_create_vertex() {
        let vertex = Vertex::new("Atlanta");
        assert_eq!(vertex.label().as_str(), "Atlanta");
        assert!(vertex.neighbors().is_empty());
        assert_eq!(vertex.degree(), 0);
        assert_eq!(format!("{}", vertex), "Atlanta");
    }

    #[test]
    fn test_add_neighbor_keeps_order_and_duplicates() {
        let mut vertex = Vertex::new("A");
        vertex.add_neighbor(id(2));
        vertex.add_neighbor(id(1));
        vertex.add_neighbor(id(2));

        assert_eq!(vertex.neighbors(), &[id(2), id(1), id(2)]);
        assert_eq!(vertex.degree(), 3);
        assert!(vertex.has_neighbor(id(1)));
        assert!(!vertex.has_neighbor(id(5)));
    }

    #[test]
    fn test_remove_neighbor_first_occurrence_only() {
        let mut vertex = Vertex::new("A");
        vertex.add_neighbor(id(1));
        vertex.add_neighbor(id(2));
        vertex.add_neighbor(id(1));

        assert!(vertex.remove_neighbor(id(1)));
        assert_eq!(vertex.neighbors(), &[id(2), id(1)]);
    }

    #[test]
    fn test_remove_absent_neighbor_is_noop() {
        let mut vertex = Vertex::new("A");
        vertex.add_neighbor(id(1));

        assert!(!vertex.remove_neighbor(id(9)));
        assert_eq!(vertex.neighbors(), &[id(1)]);
    }

    #[test]
    fn test_remove_neighbor_matches_generation() {
        let mut vertex = Vertex::new("A");
        vertex.add_neighbor(VertexId::new(1, 0));

        assert!(!vertex.remove_neighbor(VertexId::new(1, 1)));
        assert_eq!(vertex.degree(), 1);
    }

    #[test]
    fn test_remove_all_neighbor() {
        let mut vertex = Vertex::new("A");
        vertex.add_neighbor(id(1));
        vertex.add_neighbor(id(2));
        vertex.add_neighbor(id(1));

        assert_eq!(vertex.remove_all_neighbor(id(1)), 2);
        assert_eq!(vertex.neighbors(), &[id(2)]);
        assert_eq!(vertex.remove_all_neighbor(id(1)), 0);
    }
}
