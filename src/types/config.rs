//! Graph configuration.

use serde::Serialize;

/// What `insert_edge` does when the (source, destination) pair already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EdgePolicy {
    /// Fail with `DuplicateEdge`.
    #[default]
    Reject,
    /// Append a parallel edge.
    AllowParallel,
}

impl EdgePolicy {
    /// Return a human-readable name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::AllowParallel => "allow_parallel",
        }
    }

    /// Parse a policy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "allow_parallel" | "allowparallel" | "parallel" => Some(Self::AllowParallel),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tunables for an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphConfig {
    /// Duplicate edge handling.
    pub edge_policy: EdgePolicy,
}

impl GraphConfig {
    /// Config with the given edge policy.
    pub fn with_edge_policy(edge_policy: EdgePolicy) -> Self {
        Self { edge_policy }
    }
}
