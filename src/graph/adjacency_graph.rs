//! Core graph structure: vertices keyed by value, each owning its out-edges.

use indexmap::IndexMap;
use log::debug;

use crate::types::{Edge, EdgePolicy, GraphConfig, GraphError, GraphResult, Vertex, VertexValue};

use super::traversal::dfs_traverse;

/// An in-memory directed graph.
///
/// Vertices live in an insertion-ordered map so lookups are O(1) while
/// display and adjacency output keep the order vertices were added in.
/// Every operation either applies fully or returns an error and leaves the
/// graph untouched.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// All vertices, keyed by value, in insertion order.
    vertices: IndexMap<VertexValue, Vertex>,
    config: GraphConfig,
}

impl AdjacencyGraph {
    /// Create a new empty graph with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with an explicit config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: IndexMap::new(),
            config,
        }
    }

    /// The config this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges across all vertices.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// True iff the graph holds zero vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Look up a vertex by value.
    pub fn find_vertex(&self, value: VertexValue) -> Option<&Vertex> {
        self.vertices.get(&value)
    }

    /// True if a vertex with `value` exists.
    pub fn contains_vertex(&self, value: VertexValue) -> bool {
        self.vertices.contains_key(&value)
    }

    /// True if an edge `source -> destination` exists.
    pub fn has_edge(&self, source: VertexValue, destination: VertexValue) -> bool {
        self.vertices
            .get(&source)
            .is_some_and(|v| v.has_edge_to(destination))
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Add a vertex after all existing ones.
    pub fn insert_vertex(&mut self, value: VertexValue) -> GraphResult<()> {
        if self.vertices.contains_key(&value) {
            return Err(GraphError::DuplicateVertex(value));
        }
        self.vertices.insert(value, Vertex::new(value));
        debug!("inserted vertex {value} ({} total)", self.vertices.len());
        Ok(())
    }

    /// Remove a vertex, its outgoing edges, and every edge pointing at it.
    pub fn delete_vertex(&mut self, value: VertexValue) -> GraphResult<Vertex> {
        if !self.vertices.contains_key(&value) {
            return Err(GraphError::VertexNotFound(value));
        }

        // Incoming edges go first so no edge is left pointing at a missing vertex.
        let mut incoming = 0;
        for vertex in self.vertices.values_mut() {
            if vertex.value != value {
                incoming += vertex.remove_edges_to(value);
            }
        }

        let removed = self
            .vertices
            .shift_remove(&value)
            .ok_or(GraphError::VertexNotFound(value))?;
        debug!(
            "deleted vertex {value} ({incoming} incoming, {} outgoing edges dropped)",
            removed.out_degree()
        );
        Ok(removed)
    }

    /// Add a directed edge `source -> destination`. Self-loops are allowed.
    pub fn insert_edge(
        &mut self,
        source: VertexValue,
        destination: VertexValue,
    ) -> GraphResult<()> {
        match (
            self.vertices.contains_key(&source),
            self.vertices.contains_key(&destination),
        ) {
            (false, false) => {
                return Err(GraphError::EndpointsNotFound {
                    from: source,
                    to: destination,
                })
            }
            (false, true) => return Err(GraphError::VertexNotFound(source)),
            (true, false) => return Err(GraphError::VertexNotFound(destination)),
            (true, true) => {}
        }

        let policy = self.config.edge_policy;
        let vertex = self
            .vertices
            .get_mut(&source)
            .ok_or(GraphError::VertexNotFound(source))?;

        if policy == EdgePolicy::Reject && vertex.has_edge_to(destination) {
            return Err(GraphError::DuplicateEdge {
                from: source,
                to: destination,
            });
        }

        vertex.push_edge(Edge::new(destination));
        debug!("inserted edge {source} -> {destination}");
        Ok(())
    }

    /// Remove one edge `source -> destination`.
    pub fn delete_edge(
        &mut self,
        source: VertexValue,
        destination: VertexValue,
    ) -> GraphResult<()> {
        let vertex = self
            .vertices
            .get_mut(&source)
            .ok_or(GraphError::VertexNotFound(source))?;

        if !vertex.remove_first_edge_to(destination) {
            return Err(GraphError::EdgeNotFound {
                from: source,
                to: destination,
            });
        }
        debug!("deleted edge {source} -> {destination}");
        Ok(())
    }

    /// Destinations of `value`'s outgoing edges, in insertion order.
    pub fn adjacent_vertices(&self, value: VertexValue) -> GraphResult<Vec<VertexValue>> {
        self.vertices
            .get(&value)
            .map(|v| v.adjacent().collect())
            .ok_or(GraphError::VertexNotFound(value))
    }

    /// Depth-first traversal from `start`, returning vertices in discovery order.
    pub fn dfs(&self, start: VertexValue) -> GraphResult<Vec<VertexValue>> {
        dfs_traverse(self, start)
    }

    /// Every vertex paired with its adjacency list, both in insertion order.
    pub fn adjacency_list(&self) -> Vec<(VertexValue, Vec<VertexValue>)> {
        self.vertices
            .values()
            .map(|v| (v.value, v.adjacent().collect()))
            .collect()
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        debug!("graph cleared");
    }
}

impl std::fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph adjacency list:")?;
        for vertex in self.vertices.values() {
            write!(f, "{}: ", vertex.value)?;
            for destination in vertex.adjacent() {
                write!(f, "{destination} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
