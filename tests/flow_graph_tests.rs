// tests/flow_graph_tests.rs
use domfront::graph::{FlowGraph, NodeValues};
use petgraph::graph::NodeIndex;
use std::collections::BTreeSet;

fn sorted_names(g: &FlowGraph, nodes: impl Iterator<Item = NodeIndex>) -> Vec<String> {
    let mut names: Vec<String> = nodes.map(|n| g.name(n).to_string()).collect();
    names.sort();
    names
}

#[test]
fn entry_is_first_node_of_first_edge() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C")]);
    let entry = g.entry().expect("graph is not empty");
    assert_eq!(g.name(entry), "A");
}

#[test]
fn empty_graph_has_no_entry() {
    let g = FlowGraph::new();
    assert!(g.entry().is_none());
    assert!(g.is_empty());
}

#[test]
fn nodes_keep_insertion_order() {
    // D first appears as a target, C only later as a source
    let g = FlowGraph::from_edges([("A", "D"), ("C", "A"), ("D", "C")]);
    let order: Vec<String> = g.nodes().map(|n| g.name(n).to_string()).collect();
    assert_eq!(order, ["A", "D", "C"]);
}

#[test]
fn find_resolves_names() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C")]);
    let b = g.find("B").expect("B exists");
    assert_eq!(g.name(b), "B");
    assert!(g.find("Z").is_none());
}

#[test]
fn edges_connect_both_directions() {
    let g = FlowGraph::from_edges([("A", "B"), ("A", "C"), ("B", "C")]);
    let a = g.find("A").unwrap();
    let c = g.find("C").unwrap();

    assert_eq!(sorted_names(&g, g.successors(a)), ["B", "C"]);
    assert_eq!(sorted_names(&g, g.predecessors(c)), ["A", "B"]);
    assert_eq!(sorted_names(&g, g.predecessors(a)), Vec::<String>::new());
}

#[test]
fn self_loops_are_allowed() {
    let g = FlowGraph::from_edges([("A", "A"), ("A", "B")]);
    let a = g.find("A").unwrap();
    assert!(g.successors(a).any(|n| n == a));
    assert!(g.predecessors(a).any(|n| n == a));
}

#[test]
fn duplicate_edges_are_kept_as_supplied() {
    let g = FlowGraph::from_edges([("A", "B"), ("A", "B")]);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn edge_names_follow_insertion_order() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    let edges: Vec<(String, String)> =
        g.edge_names().map(|(a, b)| (a.to_string(), b.to_string())).collect();
    assert_eq!(
        edges,
        [
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string()),
            ("C".to_string(), "A".to_string()),
        ]
    );
}

#[test]
fn empty_like_preserves_node_identities() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C")]);
    let twin = g.empty_like();

    assert_eq!(twin.node_count(), g.node_count());
    assert_eq!(twin.edge_count(), 0);
    // Same names at the same indices
    for node in g.nodes() {
        assert_eq!(twin.name(node), g.name(node));
    }
}

#[test]
fn building_a_derived_graph_leaves_the_original_untouched() {
    let g = FlowGraph::from_edges([("A", "B")]);
    let mut twin = g.empty_like();
    let a = twin.find("A").unwrap();
    twin.add_edge(a, a);

    assert_eq!(g.edge_count(), 1);
    assert_eq!(twin.edge_count(), 1);
    let a_orig = g.find("A").unwrap();
    assert!(!g.successors(a_orig).any(|n| n == a_orig));
}

#[test]
fn node_values_side_map() {
    let g = FlowGraph::from_edges([("A", "B")]);
    let a = g.find("A").unwrap();
    let b = g.find("B").unwrap();

    let mut values: NodeValues<i32> = NodeValues::new();
    assert!(values.is_empty());
    values.set(a, 7);

    assert_eq!(values.get(a), Some(&7));
    assert_eq!(values.get(b), None);
    // Default materialised on demand
    assert_eq!(*values.get_mut_or_default(b), 0);
    assert_eq!(values.len(), 2);
}

#[test]
fn from_edges_accepts_owned_strings() {
    let edges: Vec<(String, String)> =
        vec![("A".to_string(), "B".to_string()), ("B".to_string(), "A".to_string())];
    let g = FlowGraph::from_edges(edges);
    let names: BTreeSet<String> = g.nodes().map(|n| g.name(n).to_string()).collect();
    assert_eq!(names, BTreeSet::from(["A".to_string(), "B".to_string()]));
}
