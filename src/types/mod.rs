//! All data types for the adjacency-graph library.

pub mod config;
pub mod edge;
pub mod error;
pub mod vertex;

pub use config::{EdgePolicy, GraphConfig};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// The key that identifies a vertex.
pub type VertexValue = i64;
