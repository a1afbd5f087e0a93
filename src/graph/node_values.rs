// src/graph/node_values.rs
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Caller-chosen payloads attached to graph nodes, kept beside the graph
/// rather than inside it. The analyses never inspect payloads.
#[derive(Debug, Clone)]
pub struct NodeValues<T> {
    values: HashMap<NodeIndex, T>,
}

impl<T> NodeValues<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }

    /// Sets the payload for a node, returning the previous one if any.
    pub fn set(&mut self, node: NodeIndex, value: T) -> Option<T> {
        self.values.insert(node, value)
    }

    #[must_use]
    pub fn get(&self, node: NodeIndex) -> Option<&T> {
        self.values.get(&node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Default> NodeValues<T> {
    /// The payload for a node, materialising the default if unset.
    pub fn get_mut_or_default(&mut self, node: NodeIndex) -> &mut T {
        self.values.entry(node).or_default()
    }
}

impl<T> Default for NodeValues<T> {
    fn default() -> Self {
        Self::new()
    }
}
