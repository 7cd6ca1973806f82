//! Fluent API for building AdjacencyGraph instances.

use crate::types::{EdgePolicy, GraphConfig, GraphResult, VertexValue};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Vertices and edges are recorded in call order and replayed through the
/// graph's own insert operations on [`build`](GraphBuilder::build), so the
/// first invalid step is reported exactly as the graph would report it.
pub struct GraphBuilder {
    config: GraphConfig,
    vertices: Vec<VertexValue>,
    edges: Vec<(VertexValue, VertexValue)>,
}

impl GraphBuilder {
    /// Create a new builder with the default config.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Use a specific config.
    pub fn config(&mut self, config: GraphConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Shorthand for setting only the edge policy.
    pub fn edge_policy(&mut self, policy: EdgePolicy) -> &mut Self {
        self.config.edge_policy = policy;
        self
    }

    /// Add a vertex.
    pub fn vertex(&mut self, value: VertexValue) -> &mut Self {
        self.vertices.push(value);
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = VertexValue>,
    {
        self.vertices.extend(values);
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(&mut self, source: VertexValue, destination: VertexValue) -> &mut Self {
        self.edges.push((source, destination));
        self
    }

    /// Build the final AdjacencyGraph.
    pub fn build(&self) -> GraphResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::with_config(self.config);
        for &value in &self.vertices {
            graph.insert_vertex(value)?;
        }
        for &(source, destination) in &self.edges {
            graph.insert_edge(source, destination)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
