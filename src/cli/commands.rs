//! CLI command implementations.
//!
//! Each command runs one graph operation and renders its outcome, success or
//! failure, to the given writer. Graph errors are rendered, not returned;
//! only a failing writer surfaces as `Err`.

use std::io::Write;

use serde_json::{json, Value};

use crate::graph::AdjacencyGraph;
use crate::types::{GraphError, GraphResult, VertexValue};

/// How command outcomes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Parse a format from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn join_values(values: &[VertexValue]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write a success line or the error, in the requested format.
fn report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    mut payload: Value,
    outcome: Result<String, GraphError>,
) -> GraphResult<()> {
    match (format, outcome) {
        (OutputFormat::Text, Ok(line)) => writeln!(out, "{line}")?,
        (OutputFormat::Text, Err(e)) => writeln!(out, "Error: {e}")?,
        (OutputFormat::Json, outcome) => {
            if let Value::Object(ref mut map) = payload {
                match outcome {
                    Ok(_) => {
                        map.insert("ok".into(), Value::Bool(true));
                    }
                    Err(e) => {
                        map.insert("ok".into(), Value::Bool(false));
                        map.insert("error".into(), Value::String(e.kind().into()));
                        map.insert("message".into(), Value::String(e.to_string()));
                    }
                }
            }
            writeln!(out, "{payload}")?;
        }
    }
    Ok(())
}

/// Insert a vertex.
pub fn cmd_insert_vertex<W: Write>(
    graph: &mut AdjacencyGraph,
    out: &mut W,
    value: VertexValue,
    format: OutputFormat,
) -> GraphResult<()> {
    let outcome = graph
        .insert_vertex(value)
        .map(|()| format!("Vertex {value} added successfully."));
    report(
        out,
        format,
        json!({"op": "insert_vertex", "vertex": value}),
        outcome,
    )
}

/// Delete a vertex and every edge touching it.
pub fn cmd_delete_vertex<W: Write>(
    graph: &mut AdjacencyGraph,
    out: &mut W,
    value: VertexValue,
    format: OutputFormat,
) -> GraphResult<()> {
    let outcome = graph
        .delete_vertex(value)
        .map(|_| format!("Vertex {value} deleted successfully."));
    report(
        out,
        format,
        json!({"op": "delete_vertex", "vertex": value}),
        outcome,
    )
}

/// Insert a directed edge.
pub fn cmd_insert_edge<W: Write>(
    graph: &mut AdjacencyGraph,
    out: &mut W,
    source: VertexValue,
    destination: VertexValue,
    format: OutputFormat,
) -> GraphResult<()> {
    let outcome = graph
        .insert_edge(source, destination)
        .map(|()| format!("Edge added between {source} and {destination}."));
    report(
        out,
        format,
        json!({"op": "insert_edge", "source": source, "destination": destination}),
        outcome,
    )
}

/// Delete a directed edge.
pub fn cmd_delete_edge<W: Write>(
    graph: &mut AdjacencyGraph,
    out: &mut W,
    source: VertexValue,
    destination: VertexValue,
    format: OutputFormat,
) -> GraphResult<()> {
    let outcome = graph
        .delete_edge(source, destination)
        .map(|()| format!("Edge between {source} and {destination} deleted successfully."));
    report(
        out,
        format,
        json!({"op": "delete_edge", "source": source, "destination": destination}),
        outcome,
    )
}

/// Show the adjacent vertices of one vertex.
pub fn cmd_adjacent<W: Write>(
    graph: &AdjacencyGraph,
    out: &mut W,
    value: VertexValue,
    format: OutputFormat,
) -> GraphResult<()> {
    let adjacent = graph.adjacent_vertices(value);
    let payload = match &adjacent {
        Ok(list) => json!({"op": "adjacent", "vertex": value, "adjacent": list}),
        Err(_) => json!({"op": "adjacent", "vertex": value}),
    };
    let outcome = adjacent.map(|list| {
        format!("Adjacent vertices of {value}: {}", join_values(&list))
            .trim_end()
            .to_string()
    });
    report(out, format, payload, outcome)
}

/// Report whether the graph is empty.
pub fn cmd_is_empty<W: Write>(
    graph: &AdjacencyGraph,
    out: &mut W,
    format: OutputFormat,
) -> GraphResult<()> {
    let empty = graph.is_empty();
    let line = if empty {
        "Graph is empty."
    } else {
        "Graph is not empty."
    };
    report(
        out,
        format,
        json!({"op": "is_empty", "empty": empty}),
        Ok(line.to_string()),
    )
}

/// Print the full adjacency list.
pub fn cmd_display<W: Write>(
    graph: &AdjacencyGraph,
    out: &mut W,
    format: OutputFormat,
) -> GraphResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{graph}")?,
        OutputFormat::Json => {
            let vertices: Vec<Value> = graph
                .adjacency_list()
                .into_iter()
                .map(|(vertex, adjacent)| json!({"vertex": vertex, "adjacent": adjacent}))
                .collect();
            let payload = json!({
                "op": "display",
                "vertex_count": graph.vertex_count(),
                "edge_count": graph.edge_count(),
                "vertices": vertices,
            });
            report(out, format, payload, Ok(String::new()))?;
        }
    }
    Ok(())
}

/// Run a depth-first traversal and print the visit order.
pub fn cmd_dfs<W: Write>(
    graph: &AdjacencyGraph,
    out: &mut W,
    start: VertexValue,
    format: OutputFormat,
) -> GraphResult<()> {
    let visited = graph.dfs(start);
    let payload = match &visited {
        Ok(order) => json!({"op": "dfs", "start": start, "visited": order}),
        Err(_) => json!({"op": "dfs", "start": start}),
    };
    let outcome = visited.map(|order| format!("DFS Traversal: {}", join_values(&order)));
    report(out, format, payload, outcome)
}
