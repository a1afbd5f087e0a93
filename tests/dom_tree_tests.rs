// tests/dom_tree_tests.rs
use domfront::analysis::{build_dom_tree, compute_dominators, immediate_dominators};
use domfront::error::GraphError;
use domfront::graph::FlowGraph;
use std::collections::BTreeSet;

fn tree_edges(g: &FlowGraph) -> BTreeSet<(String, String)> {
    g.edge_names().map(|(a, b)| (a.to_string(), b.to_string())).collect()
}

fn edges(pairs: &[(&str, &str)]) -> BTreeSet<(String, String)> {
    pairs.iter().map(|(a, b)| ((*a).to_string(), (*b).to_string())).collect()
}

fn idom_name(g: &FlowGraph, node: &str) -> String {
    let dom = compute_dominators(g).expect("rooted graph");
    let idom = immediate_dominators(g, &dom).expect("consistent table");
    let idx = g.find(node).expect("node exists");
    g.name(idom[&idx]).to_string()
}

#[test]
fn linear_chain_tree_mirrors_the_chain() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C"), ("C", "D")]);
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();

    assert_eq!(tree_edges(&tree), edges(&[("A", "B"), ("B", "C"), ("C", "D")]));
}

#[test]
fn diamond_tree_hangs_everything_off_the_entry() {
    let g = FlowGraph::from_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();

    assert_eq!(tree_edges(&tree), edges(&[("A", "B"), ("A", "C"), ("A", "D")]));
}

#[test]
fn loop_back_edge_does_not_reach_the_tree() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C"), ("C", "B")]);
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();

    assert_eq!(tree_edges(&tree), edges(&[("A", "B"), ("B", "C")]));
}

#[test]
fn self_loop_at_entry_is_dropped_from_the_tree() {
    let g = FlowGraph::from_edges([("A", "A"), ("A", "B")]);
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();

    assert_eq!(tree_edges(&tree), edges(&[("A", "B")]));
}

#[test]
fn reducible_loop_tree() {
    let g = FlowGraph::from_edges([
        ("A", "B"),
        ("B", "C"),
        ("B", "D"),
        ("C", "E"),
        ("D", "E"),
        ("E", "B"),
    ]);
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();

    assert_eq!(
        tree_edges(&tree),
        edges(&[("A", "B"), ("B", "C"), ("B", "D"), ("B", "E")])
    );
}

#[test]
fn idom_selection_with_a_deep_dominator_chain() {
    // Dom(D) \ {D} = {A, B, C}; the closest one along predecessors is C
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C"), ("C", "D")]);
    assert_eq!(idom_name(&g, "D"), "C");
    assert_eq!(idom_name(&g, "B"), "A");
}

#[test]
fn idom_search_survives_predecessor_cycles() {
    // E's predecessors C and D sit on a cycle through B; the reverse BFS
    // must terminate and still find B
    let g = FlowGraph::from_edges([
        ("A", "B"),
        ("B", "C"),
        ("B", "D"),
        ("C", "E"),
        ("D", "E"),
        ("E", "B"),
    ]);
    assert_eq!(idom_name(&g, "E"), "B");
}

#[test]
fn idom_map_has_no_entry_for_the_entry_node() {
    let g = FlowGraph::from_edges([("A", "B"), ("B", "C")]);
    let dom = compute_dominators(&g).unwrap();
    let idom = immediate_dominators(&g, &dom).unwrap();

    let a = g.find("A").unwrap();
    assert!(!idom.contains_key(&a));
    assert_eq!(idom.len(), g.node_count() - 1);
}

#[test]
fn tree_is_a_tree() {
    // N nodes, N-1 edges, every non-entry node has exactly one parent
    let g = FlowGraph::from_edges([
        ("A", "B"),
        ("B", "C"),
        ("B", "D"),
        ("C", "E"),
        ("D", "E"),
        ("E", "B"),
    ]);
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();
    let entry = tree.entry().unwrap();

    assert_eq!(tree.node_count(), g.node_count());
    assert_eq!(tree.edge_count(), g.node_count() - 1);
    for node in tree.nodes() {
        let parents = tree.predecessors(node).count();
        if node == entry {
            assert_eq!(parents, 0, "entry must be the unique root");
        } else {
            assert_eq!(parents, 1, "{} must have exactly one parent", tree.name(node));
        }
    }
}

#[test]
fn tree_construction_does_not_mutate_the_cfg() {
    let g = FlowGraph::from_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    let before: BTreeSet<_> = tree_edges(&g);
    let dom = compute_dominators(&g).unwrap();
    let _tree = build_dom_tree(&g, &dom).unwrap();

    assert_eq!(tree_edges(&g), before);
}

#[test]
fn empty_graph_builds_an_empty_tree() {
    let g = FlowGraph::new();
    let dom = compute_dominators(&g).unwrap();
    let tree = build_dom_tree(&g, &dom).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn unreachable_node_fails_before_tree_construction() {
    let g = FlowGraph::from_edges([("A", "B"), ("C", "D")]);
    let err = compute_dominators(&g).expect_err("must diagnose unreachable nodes");
    assert!(matches!(err, GraphError::UnreachableNode { .. }));
}
