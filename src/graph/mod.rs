//! In-memory graph operations: the core data structure and its traversal.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::dfs_traverse;
