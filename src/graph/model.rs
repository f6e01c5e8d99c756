use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::ModuleNode;

/// In-memory module dependency graph
///
/// Nodes live in a petgraph arena and are addressed by `NodeIndex`. Each name
/// maps to exactly one node, and a source node records at most one edge to a
/// given target. Node and edge indices follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    graph: DiGraph<ModuleNode, ()>,
    indices: HashMap<String, NodeIndex>,
    root: Option<NodeIndex>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            root: None,
        }
    }

    /// Create a graph containing only a root node with the given name
    pub fn with_root(name: &str) -> Self {
        let mut graph = Self::new();
        graph.set_root(name);
        graph
    }

    /// Return the node for `name`, creating it if it has not been seen yet
    pub fn create(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(ModuleNode::new(name));
        self.indices.insert(name.to_string(), idx);
        idx
    }

    /// Register `to` as a dependency of `from`, creating either endpoint
    ///
    /// Returns `false` when the edge was already recorded.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let from_idx = self.create(from);
        let to_idx = self.create(to);

        if self.graph.find_edge(from_idx, to_idx).is_some() {
            return false;
        }

        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    pub fn set_root(&mut self, name: &str) -> NodeIndex {
        let idx = self.create(name);
        self.root = Some(idx);
        idx
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn root_name(&self) -> Option<&str> {
        self.root.map(|idx| self.graph[idx].name())
    }

    /// Whether `name` has ever been registered, reachable from the root or not
    pub fn exists(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&ModuleNode> {
        self.graph.node_weight(idx)
    }

    /// Direct dependencies of `idx` in the order their edges were added
    pub fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks outgoing edges newest first
        let mut outgoing: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        outgoing.sort_by_key(|(id, _)| *id);
        outgoing.into_iter().map(|(_, target)| target).collect()
    }

    /// All edges as `(from, to)` name pairs, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].name(),
                self.graph[edge.target()].name(),
            )
        })
    }

    /// All known nodes, in the order they were first mentioned
    pub fn nodes(&self) -> impl Iterator<Item = &ModuleNode> + '_ {
        self.graph.node_weights()
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes().map(ModuleNode::name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &DiGraph<ModuleNode, ()> {
        &self.graph
    }
}
