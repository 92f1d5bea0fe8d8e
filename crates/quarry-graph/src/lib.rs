//! Adjacency-list graphs for Quarry.
//!
//! [`Graph`] is a directed or undirected weighted graph over
//! insertion-ordered adjacency maps, so every traversal and query is
//! deterministic for a given construction order. All routines are
//! single-pass algorithms over caller-owned data — the crate holds no
//! persistent state beyond the adjacency itself.
//!
//! # Provided algorithms
//!
//! - Breadth-first and depth-first traversal (preorder)
//! - Dijkstra single-source shortest paths (via the [`quarry_heap`]
//!   min-heap, with lazy deletion of stale entries) and path
//!   reconstruction through [`ShortestPaths`]
//! - Kahn topological ordering for directed acyclic graphs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod graph;
pub mod shortest_path;

pub use error::GraphError;
pub use graph::Graph;
pub use shortest_path::ShortestPaths;
