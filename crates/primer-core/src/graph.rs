//! Graph store using petgraph::StableDiGraph keyed by string ids

use crate::model::{Node, Phase};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// A vertex in the underlying graph.
///
/// Ids that have only appeared as edge endpoints get a vertex with no node,
/// so adjacency can be recorded without validating referential integrity.
#[derive(Debug, Clone)]
struct Vertex {
    id: String,
    node: Option<Node>,
}

/// Mutable graph under construction. Directed multigraph: duplicate edges and
/// self-loops are kept.
pub struct GraphStore {
    inner: StableDiGraph<Vertex, u64>,
    index: HashMap<String, NodeIndex>,
    /// Insertion ordinal for the next edge; orders each outgoing sequence.
    next_ordinal: u64,
    phase: Phase,
}

impl std::fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphStore")
            .field("phase", &self.phase)
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
            next_ordinal: 0,
            phase: Phase::Empty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn vertex(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.inner.add_node(Vertex {
            id: id.to_string(),
            node: None,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Ensure a node with `id` exists.
    ///
    /// An existing node is replaced by a fresh default-valued one; its
    /// outgoing edges are kept. The returned handle lets the caller set the
    /// payload while the store is still under construction.
    pub fn add_node(&mut self, id: &str) -> &mut Node {
        self.phase = Phase::UnderConstruction;
        let idx = self.vertex(id);
        let vertex = &mut self.inner[idx];
        if vertex.node.is_some() {
            tracing::debug!("Node {} already present, resetting payload", id);
        }
        vertex.node.insert(Node::new(id))
    }

    /// Append `to` to the outgoing sequence of `from`. Neither end has to be
    /// a known node.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.phase = Phase::UnderConstruction;
        let source = self.vertex(from);
        let target = self.vertex(to);
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        self.inner.add_edge(source, target, ordinal);
    }

    /// Iterate over all nodes. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
            .filter_map(|vertex| vertex.node.as_ref())
    }

    /// The set of node ids.
    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes().map(|n| n.id.as_str()).collect()
    }

    /// Get a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        let idx = *self.index.get(id)?;
        self.inner.node_weight(idx)?.node.as_ref()
    }

    /// Whether `id` was added as a node (edge endpoints alone don't count).
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Outgoing targets of `id` in insertion order.
    pub fn targets(&self, id: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        let mut outgoing: Vec<(u64, NodeIndex)> = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect();
        outgoing.sort_unstable_by_key(|(ordinal, _)| *ordinal);
        outgoing
            .into_iter()
            .filter_map(|(_, target)| self.inner.node_weight(target))
            .map(|vertex| vertex.id.as_str())
            .collect()
    }

    /// Every id with at least one outgoing edge, node or not. Order is
    /// unspecified.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.index
            .iter()
            .filter(move |&(_, &idx)| {
                self.inner
                    .edges_directed(idx, Direction::Outgoing)
                    .next()
                    .is_some()
            })
            .map(|(id, _)| id.as_str())
    }

    /// Number of entries in the outgoing sequence of `id`.
    pub fn out_degree(&self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&idx) => self.inner.edges_directed(idx, Direction::Outgoing).count(),
            None => 0,
        }
    }

    /// Total number of nodes (placeholder endpoints excluded).
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Finish construction. The returned graph has no mutating methods.
    pub fn freeze(self) -> FrozenGraph {
        tracing::debug!(
            "Graph frozen with {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        );
        FrozenGraph { store: self }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only graph produced by [`GraphStore::freeze`].
pub struct FrozenGraph {
    store: GraphStore,
}

impl std::fmt::Debug for FrozenGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrozenGraph")
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

impl FrozenGraph {
    pub fn phase(&self) -> Phase {
        Phase::Frozen
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.store.nodes()
    }

    pub fn node_ids(&self) -> HashSet<&str> {
        self.store.node_ids()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.store.node(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    pub fn targets(&self, id: &str) -> Vec<&str> {
        self.store.targets(id)
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.store.sources()
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.store.out_degree(id)
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }
}
