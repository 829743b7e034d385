use super::*;
use crate::error::GraphError;

fn build(edges: &[(&str, &str, f64, bool)]) -> Graph {
    let mut graph = Graph::new();
    for (source, target, weight, bidirectional) in edges {
        graph
            .add_edge(source, target, *weight, *bidirectional)
            .unwrap();
    }
    graph
}

fn edge_names(graph: &Graph) -> Vec<(String, String)> {
    let mut names: Vec<(String, String)> = graph
        .edges()
        .map(|e| {
            let (from, to) = graph.endpoint_names(e);
            (from.to_string(), to.to_string())
        })
        .collect();
    names.sort();
    names
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        distance: 1.0,
        name: "A",
        node: NodeId(0),
    };
    let entry2 = HeapEntry {
        distance: 2.0,
        name: "B",
        node: NodeId(1),
    };
    let entry3 = HeapEntry {
        distance: 1.0,
        name: "C",
        node: NodeId(2),
    };

    // Lower distance should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to the name
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_heap_pops_smallest_name_on_tie() {
    let mut heap = BinaryHeap::new();
    for (name, id) in [("Zed", 0), ("Alpha", 1), ("Mid", 2)] {
        heap.push(Reverse(HeapEntry {
            distance: 4.0,
            name,
            node: NodeId(id),
        }));
    }
    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.name)).collect();
    assert_eq!(order, vec!["Alpha", "Mid", "Zed"]);
}

#[test]
fn test_bidirectional_shortcut_not_taken() {
    let graph = build(&[
        ("Start", "Middle1", 1.0, false),
        ("Middle1", "Middle2", 1.0, false),
        ("Middle2", "End", 1.0, false),
        ("End", "Start", 5.0, true),
    ]);
    let calculator = DijkstraCalculator::new(&graph);
    let shortest = calculator.get_shortest_graph("Start", "End").unwrap();

    assert_eq!(shortest.distance(), 3.0);
    assert_eq!(shortest.graph().node_count(), 4);
    assert_eq!(shortest.graph().edge_count(), 3);
    assert!(shortest.graph().try_get_edge("Start", "End").is_none());
}

#[test]
fn test_bidirectional_edge_walked_backwards() {
    let graph = build(&[("A", "B", 2.0, true)]);
    let distances = DijkstraCalculator::new(&graph).get_all_distances("B").unwrap();
    assert_eq!(distances.get("A"), Some(2.0));
}

#[test]
fn test_ties_are_preserved() {
    let graph = build(&[
        ("Start", "Middle1", 1.0, false),
        ("Start", "Middle2", 1.0, false),
        ("Middle1", "End", 1.0, false),
        ("Middle2", "End", 1.0, false),
    ]);
    let shortest = DijkstraCalculator::new(&graph)
        .get_shortest_graph("Start", "End")
        .unwrap();

    assert_eq!(shortest.distance(), 2.0);
    assert_eq!(shortest.graph().node_count(), 4);
    assert_eq!(
        edge_names(shortest.graph()),
        vec![
            ("Middle1".to_string(), "End".to_string()),
            ("Middle2".to_string(), "End".to_string()),
            ("Start".to_string(), "Middle1".to_string()),
            ("Start".to_string(), "Middle2".to_string()),
        ]
    );
}

#[test]
fn test_longer_branch_excluded() {
    let graph = build(&[
        ("Start", "Middle1", 2.0, false),
        ("Start", "Middle2", 1.0, false),
        ("Middle1", "End", 1.0, false),
        ("Middle2", "End", 1.0, false),
    ]);
    let shortest = DijkstraCalculator::new(&graph)
        .get_shortest_graph("Start", "End")
        .unwrap();

    assert_eq!(shortest.distance(), 2.0);
    assert!(!shortest.graph().contains_node("Middle1"));
    assert_eq!(
        edge_names(shortest.graph()),
        vec![
            ("Middle2".to_string(), "End".to_string()),
            ("Start".to_string(), "Middle2".to_string()),
        ]
    );
}

#[test]
fn test_reconstructed_edges_carry_weight_and_distance() {
    let graph = build(&[("A", "B", 1.5, false), ("B", "C", 2.0, false)]);
    let shortest = DijkstraCalculator::new(&graph)
        .get_shortest_graph("A", "C")
        .unwrap();

    let edge = shortest.graph().get_edge("B", "C").unwrap();
    assert_eq!(edge.weight().value(), 2.0);
    assert_eq!(edge.description, "2");
    assert!(!edge.is_bidirectional());
    assert_eq!(shortest.distance_of("B"), Some(1.5));
    assert_eq!(
        shortest.graph().get_node("B").unwrap().description.as_deref(),
        Some("distance: 1.5")
    );
}

#[test]
fn test_unreachable_target() {
    let graph = build(&[("A", "B", 1.0, false), ("C", "D", 1.0, false)]);
    let calculator = DijkstraCalculator::new(&graph);

    let distances = calculator.get_all_distances("A").unwrap();
    assert_eq!(distances.get("A"), Some(0.0));
    assert_eq!(distances.get("D"), None);

    assert!(matches!(
        calculator.get_shortest_graph("A", "D"),
        Err(GraphError::PathNotFound { .. })
    ));
}

#[test]
fn test_unknown_source() {
    let graph = build(&[("A", "B", 1.0, false)]);
    assert!(matches!(
        DijkstraCalculator::new(&graph).get_all_distances("Nope"),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_calculator_reusable_across_sources() {
    let graph = build(&[("A", "B", 1.0, false), ("B", "C", 1.0, false)]);
    let calculator = DijkstraCalculator::new(&graph);
    assert_eq!(calculator.get_all_distances("A").unwrap().get("C"), Some(2.0));
    assert_eq!(calculator.get_all_distances("B").unwrap().get("C"), Some(1.0));
    assert_eq!(calculator.get_all_distances("B").unwrap().get("A"), None);
}

#[test]
fn test_cancelled_run_is_interrupted() {
    let graph = build(&[("A", "B", 1.0, false)]);
    let token = CancellationToken::new();
    token.cancel();
    let calculator = DijkstraCalculator::new(&graph).with_cancellation(token);
    assert!(matches!(
        calculator.get_all_distances("A"),
        Err(GraphError::Interrupted)
    ));
}

#[test]
fn test_nearly_equal_branch_is_not_a_tie() {
    let graph = build(&[
        ("S", "A", 1.0, false),
        ("A", "T", 1.0, false),
        ("S", "B", 1.0, false),
        ("B", "T", 1.000000001, false),
    ]);
    let shortest = DijkstraCalculator::new(&graph)
        .get_shortest_graph("S", "T")
        .unwrap();
    assert_eq!(shortest.distance(), 2.0);
    assert!(!shortest.graph().contains_node("B"));
    assert_eq!(
        edge_names(shortest.graph()),
        vec![
            ("A".to_string(), "T".to_string()),
            ("S".to_string(), "A".to_string()),
        ]
    );
}

#[test]
fn test_rounding_noise_still_ties() {
    // 0.1 + 0.2 is one rounding step above 0.3
    let graph = build(&[
        ("S", "A", 0.1, false),
        ("A", "T", 0.2, false),
        ("S", "T", 0.3, false),
    ]);
    let shortest = DijkstraCalculator::new(&graph)
        .get_shortest_graph("S", "T")
        .unwrap();
    assert_eq!(shortest.distance(), 0.3);
    assert_eq!(shortest.graph().node_count(), 3);
    assert_eq!(shortest.graph().edge_count(), 3);
}

#[test]
fn test_overflowing_path_is_an_error() {
    let graph = build(&[("A", "B", f64::MAX, false), ("B", "C", f64::MAX, false)]);
    assert!(matches!(
        DijkstraCalculator::new(&graph).get_all_distances("A"),
        Err(GraphError::InvalidArgument(_))
    ));
}
