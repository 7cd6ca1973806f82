//! Error types for the adjacency-graph library.

use thiserror::Error;

use super::VertexValue;

/// All errors that can occur in the adjacency-graph library.
///
/// Every graph error is recoverable: the operation that produced it left the
/// graph exactly as it was before the call.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex with this value is already present.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(VertexValue),

    /// No vertex with this value exists.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexValue),

    /// Neither endpoint of a requested edge exists.
    #[error("Vertices {from} and {to} not found")]
    EndpointsNotFound {
        from: VertexValue,
        to: VertexValue,
    },

    /// The edge is already present and the graph rejects parallel edges.
    #[error("Edge between {from} and {to} already exists")]
    DuplicateEdge {
        from: VertexValue,
        to: VertexValue,
    },

    /// No edge from `from` to `to`.
    #[error("Edge between {from} and {to} not found")]
    EdgeNotFound {
        from: VertexValue,
        to: VertexValue,
    },

    /// IO error while talking to the operator.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for the errors that mean "something referenced is absent".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::VertexNotFound(_) | Self::EndpointsNotFound { .. } | Self::EdgeNotFound { .. }
        )
    }

    /// Short machine-readable name, used by the JSON renderer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateVertex(_) => "duplicate_vertex",
            Self::VertexNotFound(_) => "vertex_not_found",
            Self::EndpointsNotFound { .. } => "endpoints_not_found",
            Self::DuplicateEdge { .. } => "duplicate_edge",
            Self::EdgeNotFound { .. } => "edge_not_found",
            Self::Io(_) => "io",
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
