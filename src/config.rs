//! Graph configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`GraphConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid graph config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Graph configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Vertex slots reserved up front
    pub vertex_capacity: usize,
    /// Edge records reserved up front
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 64,
            edge_capacity: 256,
        }
    }
}

impl GraphConfig {
    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
