//! adjacency-graph: an in-memory directed graph with adjacency lists.
//!
//! Vertices are keyed by integer value and kept in insertion order; each
//! vertex owns its outgoing edges. The graph supports vertex and edge
//! insertion and deletion, adjacency queries, and an iterative depth-first
//! traversal. The `cli` module drives it from a numbered command menu.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::{Menu, MenuChoice, OutputFormat};
pub use graph::{dfs_traverse, AdjacencyGraph, GraphBuilder};
pub use types::{
    Edge, EdgePolicy, GraphConfig, GraphError, GraphResult, Vertex, VertexValue,
};
