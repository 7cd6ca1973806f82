//! The vertex record and its outgoing edge list.

use serde::Serialize;

use super::{Edge, VertexValue};

/// A uniquely-valued node together with the edges it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    /// The vertex's key.
    pub value: VertexValue,
    /// Outgoing edges, in insertion order.
    edges: Vec<Edge>,
}

impl Vertex {
    /// Create a vertex with no outgoing edges.
    pub fn new(value: VertexValue) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Destination values of the outgoing edges, in insertion order.
    pub fn adjacent(&self) -> impl Iterator<Item = VertexValue> + '_ {
        self.edges.iter().map(|e| e.destination)
    }

    /// True if at least one edge points at `destination`.
    pub fn has_edge_to(&self, destination: VertexValue) -> bool {
        self.edges.iter().any(|e| e.points_to(destination))
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Remove the first edge pointing at `destination`. Returns whether one
    /// was removed.
    pub(crate) fn remove_first_edge_to(&mut self, destination: VertexValue) -> bool {
        match self.edges.iter().position(|e| e.points_to(destination)) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every edge pointing at `destination`. Returns how many went.
    pub(crate) fn remove_edges_to(&mut self, destination: VertexValue) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.points_to(destination));
        before - self.edges.len()
    }
}
