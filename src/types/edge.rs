//! The directed edge record.

use serde::Serialize;

use super::VertexValue;

/// A directed relationship to another vertex.
///
/// An edge is owned by its source vertex, so only the destination is stored.
/// There is no weight or label: the (source, destination) pair is the
/// edge's whole identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Value of the vertex this edge points at.
    pub destination: VertexValue,
}

impl Edge {
    /// Create an edge pointing at `destination`.
    pub fn new(destination: VertexValue) -> Self {
        Self { destination }
    }

    /// True if this edge points at `value`.
    pub fn points_to(&self, value: VertexValue) -> bool {
        self.destination == value
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-> {}", self.destination)
    }
}
