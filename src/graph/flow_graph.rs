// src/graph/flow_graph.rs
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::sync::Arc;

/// A node of a [`FlowGraph`]. Identity is the name, unique within its graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: Arc<str>,
}

/// A rooted directed graph keyed by node name.
///
/// Nodes live in a petgraph [`DiGraph`] and are addressed by [`NodeIndex`];
/// indices follow insertion order, so the node at index 0 is the **entry
/// node**: the first endpoint of the first edge consumed at build time.
///
/// Duplicate edges supplied by the caller are kept as supplied (petgraph
/// stores them as parallel edges); consumers that need edge-set semantics
/// de-duplicate themselves.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    graph: DiGraph<Node, ()>,
    index: HashMap<Arc<str>, NodeIndex>,
}

impl FlowGraph {
    #[must_use]
    pub fn new() -> Self {
        Self { graph: DiGraph::new(), index: HashMap::new() }
    }

    /// Builds a graph from an edge stream. The order of encounter defines
    /// node insertion order; the very first node name becomes the entry.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            let from_idx = graph.add_node(from.as_ref());
            let to_idx = graph.add_node(to.as_ref());
            graph.add_edge(from_idx, to_idx);
        }
        graph
    }

    /// Interns a node by name, returning the existing index if already seen.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let name: Arc<str> = Arc::from(name);
        let idx = self.graph.add_node(Node { name: Arc::clone(&name) });
        self.index.insert(name, idx);
        idx
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    #[must_use]
    pub const fn graph(&self) -> &DiGraph<Node, ()> {
        &self.graph
    }

    /// The entry node, or `None` for an empty graph.
    #[must_use]
    pub fn entry(&self) -> Option<NodeIndex> {
        self.graph.node_indices().next()
    }

    /// Node indices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node].name
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    pub fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Incoming)
    }

    /// Edges as index pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph.edge_indices().filter_map(|e| self.graph.edge_endpoints(e))
    }

    /// Edges as name pairs, in insertion order.
    pub fn edge_names(&self) -> impl Iterator<Item = (Arc<str>, Arc<str>)> + '_ {
        self.edges().map(|(from, to)| {
            (Arc::clone(&self.graph[from].name), Arc::clone(&self.graph[to].name))
        })
    }

    /// A new graph with the same nodes (same names, same indices) and no
    /// edges. Derived graphs such as the dominator tree start here, so the
    /// original graph is never mutated.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        let mut out = Self::new();
        for idx in self.graph.node_indices() {
            out.add_node(&self.graph[idx].name);
        }
        out
    }
}

impl Default for FlowGraph {
    fn default() -> Self {
        Self::new()
    }
}
