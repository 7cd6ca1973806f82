//! Phase 1 tests: vertex and edge mutation, invariants, config, builder.

use adjacency_graph::graph::{AdjacencyGraph, GraphBuilder};
use adjacency_graph::types::{EdgePolicy, GraphConfig, GraphError, VertexValue};

use rand::Rng;

fn assert_no_dangling_edges(graph: &AdjacencyGraph) {
    for vertex in graph.vertices() {
        for dest in vertex.adjacent() {
            assert!(
                graph.contains_vertex(dest),
                "edge {} -> {} points at a missing vertex",
                vertex.value,
                dest
            );
        }
    }
}

// ==================== Vertex Tests ====================

#[test]
fn test_new_graph_is_empty() {
    let graph = AdjacencyGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.config().edge_policy, EdgePolicy::Reject);
}

#[test]
fn test_insert_vertex() {
    let mut graph = AdjacencyGraph::new();
    graph.insert_vertex(7).unwrap();
    assert!(!graph.is_empty());
    assert!(graph.contains_vertex(7));
    let vertex = graph.find_vertex(7).unwrap();
    assert_eq!(vertex.value, 7);
    assert!(vertex.edges().is_empty());
}

#[test]
fn test_duplicate_vertex_rejected() {
    let mut graph = AdjacencyGraph::new();
    graph.insert_vertex(1).unwrap();
    graph.insert_vertex(2).unwrap();
    graph.insert_edge(1, 2).unwrap();

    let result = graph.insert_vertex(1);
    match result.unwrap_err() {
        GraphError::DuplicateVertex(1) => {}
        e => panic!("Expected DuplicateVertex error, got {:?}", e),
    }
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![2]);
}

#[test]
fn test_vertex_insertion_order_preserved() {
    let mut graph = AdjacencyGraph::new();
    for v in [5, -3, 42, 0] {
        graph.insert_vertex(v).unwrap();
    }
    let order: Vec<VertexValue> = graph.vertices().map(|v| v.value).collect();
    assert_eq!(order, vec![5, -3, 42, 0]);
}

#[test]
fn test_delete_vertex_keeps_remaining_order() {
    let mut graph = GraphBuilder::new().vertices([1, 2, 3, 4]).build().unwrap();
    graph.delete_vertex(2).unwrap();
    let order: Vec<VertexValue> = graph.vertices().map(|v| v.value).collect();
    assert_eq!(order, vec![1, 3, 4]);
}

#[test]
fn test_delete_missing_vertex() {
    let mut graph = AdjacencyGraph::new();
    graph.insert_vertex(1).unwrap();
    match graph.delete_vertex(9).unwrap_err() {
        GraphError::VertexNotFound(9) => {}
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_delete_vertex_removes_incoming_and_outgoing_edges() {
    let mut graph = GraphBuilder::new()
        .vertices([1, 2, 3, 4])
        .edge(1, 2)
        .edge(3, 2)
        .edge(2, 4)
        .edge(2, 2)
        .edge(1, 3)
        .build()
        .unwrap();
    assert_eq!(graph.edge_count(), 5);

    let removed = graph.delete_vertex(2).unwrap();
    assert_eq!(removed.value, 2);
    assert_eq!(removed.out_degree(), 2);

    assert!(!graph.contains_vertex(2));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![3]);
    assert!(graph.adjacent_vertices(3).unwrap().is_empty());
    assert_no_dangling_edges(&graph);
}

#[test]
fn test_is_empty_after_last_delete() {
    let mut graph = AdjacencyGraph::new();
    graph.insert_vertex(1).unwrap();
    graph.insert_vertex(2).unwrap();
    graph.delete_vertex(1).unwrap();
    assert!(!graph.is_empty());
    graph.delete_vertex(2).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_clear() {
    let mut graph = GraphBuilder::new().vertices([1, 2]).edge(1, 2).build().unwrap();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// ==================== Edge Tests ====================

#[test]
fn test_adjacent_vertices_keep_insertion_order() {
    let mut graph = GraphBuilder::new().vertices([1, 2, 3]).build().unwrap();
    graph.insert_edge(1, 2).unwrap();
    graph.insert_edge(1, 3).unwrap();
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![2, 3]);
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
}

#[test]
fn test_adjacent_vertices_empty_and_missing() {
    let graph = GraphBuilder::new().vertex(1).build().unwrap();
    assert!(graph.adjacent_vertices(1).unwrap().is_empty());
    match graph.adjacent_vertices(2).unwrap_err() {
        GraphError::VertexNotFound(2) => {}
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }
}

#[test]
fn test_self_loop_allowed() {
    let mut graph = GraphBuilder::new().vertex(1).build().unwrap();
    graph.insert_edge(1, 1).unwrap();
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![1]);
}

#[test]
fn test_insert_edge_missing_endpoints() {
    let mut graph = GraphBuilder::new().vertex(1).build().unwrap();

    match graph.insert_edge(5, 1).unwrap_err() {
        GraphError::VertexNotFound(5) => {}
        e => panic!("Expected VertexNotFound(5), got {:?}", e),
    }
    match graph.insert_edge(1, 6).unwrap_err() {
        GraphError::VertexNotFound(6) => {}
        e => panic!("Expected VertexNotFound(6), got {:?}", e),
    }
    match graph.insert_edge(5, 6).unwrap_err() {
        GraphError::EndpointsNotFound {
            from: 5,
            to: 6,
        } => {}
        e => panic!("Expected EndpointsNotFound, got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_duplicate_edge_rejected_by_default() {
    let mut graph = GraphBuilder::new().vertices([1, 2]).edge(1, 2).build().unwrap();
    let err = graph.insert_edge(1, 2).unwrap_err();
    match err {
        GraphError::DuplicateEdge {
            from: 1,
            to: 2,
        } => {}
        ref e => panic!("Expected DuplicateEdge error, got {:?}", e),
    }
    assert!(!err.is_not_found());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_parallel_edges_when_allowed() {
    let mut graph =
        AdjacencyGraph::with_config(GraphConfig::with_edge_policy(EdgePolicy::AllowParallel));
    graph.insert_vertex(1).unwrap();
    graph.insert_vertex(2).unwrap();
    graph.insert_vertex(3).unwrap();
    graph.insert_edge(1, 2).unwrap();
    graph.insert_edge(1, 3).unwrap();
    graph.insert_edge(1, 2).unwrap();
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![2, 3, 2]);

    // Only the first match goes.
    graph.delete_edge(1, 2).unwrap();
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![3, 2]);

    // Deleting the destination vertex drops every parallel edge to it.
    graph.insert_edge(1, 2).unwrap();
    graph.delete_vertex(2).unwrap();
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![3]);
}

#[test]
fn test_delete_edge() {
    let mut graph = GraphBuilder::new()
        .vertices([1, 2, 3])
        .edge(1, 2)
        .edge(1, 3)
        .build()
        .unwrap();
    graph.delete_edge(1, 2).unwrap();
    assert_eq!(graph.adjacent_vertices(1).unwrap(), vec![3]);
    assert!(graph.contains_vertex(2));
}

#[test]
fn test_delete_edge_errors_leave_graph_unchanged() {
    let mut graph = GraphBuilder::new().vertices([1, 2]).edge(1, 2).build().unwrap();

    match graph.delete_edge(9, 2).unwrap_err() {
        GraphError::VertexNotFound(9) => {}
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }
    match graph.delete_edge(2, 1).unwrap_err() {
        GraphError::EdgeNotFound {
            from: 2,
            to: 1,
        } => {}
        e => panic!("Expected EdgeNotFound error, got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacency_list(), vec![(1, vec![2]), (2, vec![])]);
}

// ==================== Display Tests ====================

#[test]
fn test_adjacency_list_and_display() {
    let graph = GraphBuilder::new()
        .vertices([3, 1, 2])
        .edge(3, 2)
        .edge(3, 1)
        .edge(1, 3)
        .build()
        .unwrap();

    assert_eq!(
        graph.adjacency_list(),
        vec![(3, vec![2, 1]), (1, vec![3]), (2, vec![])]
    );
    assert_eq!(
        graph.to_string(),
        "Graph adjacency list:\n3: 2 1 \n1: 3 \n2: \n"
    );
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_reports_first_invalid_step() {
    let result = GraphBuilder::new().vertices([1, 2]).edge(1, 3).build();
    match result.unwrap_err() {
        GraphError::VertexNotFound(3) => {}
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }

    let result = GraphBuilder::new().vertices([1, 1]).build();
    assert!(matches!(result, Err(GraphError::DuplicateVertex(1))));
}

#[test]
fn test_builder_edge_policy() {
    let graph = GraphBuilder::new()
        .edge_policy(EdgePolicy::AllowParallel)
        .vertices([1, 2])
        .edge(1, 2)
        .edge(1, 2)
        .build()
        .unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(EdgePolicy::from_name("parallel"), Some(EdgePolicy::AllowParallel));
    assert_eq!(EdgePolicy::Reject.to_string(), "reject");
}

// ==================== Invariant Tests ====================

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = rand::thread_rng();
    let mut graph = AdjacencyGraph::new();

    for _ in 0..2_000 {
        let a: VertexValue = rng.gen_range(0..30);
        let b: VertexValue = rng.gen_range(0..30);
        let before_vertices = graph.vertex_count();
        let before_edges = graph.edge_count();

        let result = match rng.gen_range(0..4) {
            0 => graph.insert_vertex(a),
            1 => graph.delete_vertex(a).map(|_| ()),
            2 => graph.insert_edge(a, b),
            _ => graph.delete_edge(a, b),
        };

        if result.is_err() {
            assert_eq!(graph.vertex_count(), before_vertices);
            assert_eq!(graph.edge_count(), before_edges);
        }

        let mut values: Vec<VertexValue> = graph.vertices().map(|v| v.value).collect();
        let len = values.len();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), len, "vertex values must stay distinct");

        for vertex in graph.vertices() {
            let mut dests: Vec<VertexValue> = vertex.adjacent().collect();
            let n = dests.len();
            dests.sort_unstable();
            dests.dedup();
            assert_eq!(dests.len(), n, "no parallel edges under Reject");
        }
        assert_no_dangling_edges(&graph);
    }
}
