//! Edge construction options

use serde::{Deserialize, Serialize};

/// Options recognized by [`Graph::add_edge`](super::Graph::add_edge)
///
/// Defaults to an unweighted bidirectional edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Also record the reverse edge and the reverse neighbor entry
    pub bidirectional: bool,

    /// Weight shared by the forward and reverse record
    pub weight: Option<i64>,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            bidirectional: true,
            weight: None,
        }
    }
}

impl EdgeOptions {
    pub fn new(bidirectional: bool, weight: Option<i64>) -> Self {
        Self { bidirectional, weight }
    }

    /// Unweighted, one direction only
    pub fn directed() -> Self {
        Self {
            bidirectional: false,
            weight: None,
        }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }
}
