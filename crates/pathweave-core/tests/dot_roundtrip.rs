//! DOT export followed by import

use pathweave_core::dot::{from_dot_text, to_dot_text};
use pathweave_core::Graph;

fn sample() -> Graph {
    let mut graph = Graph::new();
    graph
        .add_edge("Start", "Middle1", 1.0, false)
        .unwrap()
        .add_edge("Middle1", "Middle2", 0.25, false)
        .unwrap()
        .add_edge("Middle2", "End", 3.5, true)
        .unwrap()
        .add_edge("End", "Start", 12.0, false)
        .unwrap();
    graph.add_node("Isolated").unwrap();
    graph
}

#[test]
fn test_roundtrip_preserves_structure() {
    let original = sample();
    let restored = from_dot_text(&to_dot_text(&original)).unwrap();

    assert_eq!(restored.node_count(), original.node_count());
    assert_eq!(restored.edge_count(), original.edge_count());

    for edge in original.edges() {
        let (from, to) = original.endpoint_names(edge);
        let copy = restored.get_edge(from, to).unwrap();
        assert!((copy.weight().value() - edge.weight().value()).abs() < 1e-9);
        assert_eq!(copy.is_bidirectional(), edge.is_bidirectional());
    }
    assert!(restored.try_get_edge("End", "Middle2").is_some());
    assert!(restored.try_get_edge("Middle1", "Start").is_none());
}

#[test]
fn test_roundtrip_twice_is_stable() {
    let once = to_dot_text(&from_dot_text(&to_dot_text(&sample())).unwrap());
    let twice = to_dot_text(&from_dot_text(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn test_roundtrip_keeps_keyword_and_numeral_names() {
    let mut original = Graph::new();
    original
        .add_edge("node", "End", 1.0, false)
        .unwrap()
        .add_edge("graph", "End", 2.0, false)
        .unwrap()
        .add_edge("Digraph", "7", 3.0, true)
        .unwrap()
        .add_edge("strict", "subgraph", 0.5, false)
        .unwrap();

    let restored = from_dot_text(&to_dot_text(&original)).unwrap();

    assert_eq!(restored.node_count(), original.node_count());
    assert_eq!(restored.edge_count(), original.edge_count());
    assert_eq!(restored.get_edge("graph", "End").unwrap().weight().value(), 2.0);
    assert!(restored.get_edge("7", "Digraph").unwrap().is_bidirectional());
    assert!(restored.try_get_edge("strict", "subgraph").is_some());
}

#[test]
fn test_roundtrip_keeps_node_descriptions() {
    let mut original = sample();
    let id = original.node_id("Isolated").unwrap();
    original.node_mut(id).description = Some("nobody \"visits\"".to_string());

    let restored = from_dot_text(&to_dot_text(&original)).unwrap();
    assert_eq!(
        restored.get_node("Isolated").unwrap().description.as_deref(),
        Some("nobody 'visits'")
    );
    assert_eq!(
        restored.get_node("Start").unwrap().description.as_deref(),
        Some("Start")
    );
}
