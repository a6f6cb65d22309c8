use std::collections::HashMap;

/// Dense index of a node inside one [`DependencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// DependencyGraph aggregate representing the dependency structure of one index
///
/// Names are interned to [`NodeId`]s. A node is either *defined* (it has its
/// own record) or a *stub* (only ever referenced as a dependency target).
/// Stubs never have outgoing edges. The graph may contain cycles.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    edges: Vec<Vec<NodeId>>,
    defined: Vec<bool>,
    edge_count: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, adding a stub node if it is not present yet
    pub(crate) fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.edges.push(Vec::new());
        self.defined.push(false);
        id
    }

    pub(crate) fn mark_defined(&mut self, id: NodeId) {
        self.defined[id.0] = true;
    }

    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges[from.0].push(to);
        self.edge_count += 1;
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.0]
    }

    /// Outgoing edges of `id`, in the order they were added
    pub fn dependencies(&self, id: NodeId) -> &[NodeId] {
        &self.edges[id.0]
    }

    pub fn is_defined(&self, id: NodeId) -> bool {
        self.defined[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.names.len()).map(NodeId)
    }

    pub fn defined_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(|id| self.defined[id.0])
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn defined_count(&self) -> usize {
        self.defined.iter().filter(|d| **d).count()
    }

    pub fn stub_count(&self) -> usize {
        self.node_count() - self.defined_count()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
