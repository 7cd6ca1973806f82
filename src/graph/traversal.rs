//! Graph traversal algorithms (DFS).

use std::collections::HashSet;

use log::trace;

use crate::types::{GraphError, GraphResult, VertexValue};

use super::AdjacencyGraph;

/// Iterative depth-first traversal from `start`.
///
/// Uses an explicit stack so deep or cyclic graphs never exhaust the call
/// stack. A vertex may be pushed more than once before it is popped; the
/// visited check on pop keeps each vertex in the output exactly once.
/// Visited state is local to the call, so the graph is never mutated.
pub fn dfs_traverse(graph: &AdjacencyGraph, start: VertexValue) -> GraphResult<Vec<VertexValue>> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start));
    }

    let mut visited: HashSet<VertexValue> = HashSet::new();
    let mut visited_order: Vec<VertexValue> = Vec::new();
    let mut stack: Vec<VertexValue> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        visited_order.push(current);
        trace!("dfs visit {current} (stack depth {})", stack.len());

        let Some(vertex) = graph.find_vertex(current) else {
            continue;
        };
        for neighbor in vertex.adjacent() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(visited_order)
}

