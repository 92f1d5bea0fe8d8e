//! Error types for graph operations.

use std::error::Error;
use std::fmt;

/// Errors arising from graph construction or queries.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    /// An edge weight was negative (or not a number).
    ///
    /// Non-negative weights are required for Dijkstra to be correct, so
    /// they are rejected at insertion rather than at query time.
    NegativeWeight {
        /// The offending weight.
        weight: f64,
    },
    /// A queried vertex is not in the graph.
    UnknownVertex {
        /// Rendering of the offending vertex.
        vertex: String,
    },
    /// Topological sort was requested on an undirected graph.
    Undirected,
    /// The graph contains at least one cycle, so no topological order
    /// covers every vertex.
    Cycle,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWeight { weight } => {
                write!(f, "edge weight must be non-negative, got {weight}")
            }
            Self::UnknownVertex { vertex } => {
                write!(f, "vertex {vertex} not in graph")
            }
            Self::Undirected => {
                write!(f, "topological sort requires a directed graph")
            }
            Self::Cycle => {
                write!(f, "graph has at least one cycle")
            }
        }
    }
}

impl Error for GraphError {}
