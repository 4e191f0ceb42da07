//! Core data structures shared by the construction pipeline

use serde::{Deserialize, Serialize};

/// A single node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub value: i64,
}

impl Node {
    /// A fresh node carrying the default payload.
    pub fn new(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            value: 0,
        }
    }
}

/// Lifecycle of a constructed structure.
///
/// `Frozen` is reached exactly once and never left. The frozen form of each
/// structure is its own type, so this is mostly useful for logging and
/// assertions during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Empty,
    UnderConstruction,
    Frozen,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Empty => "empty",
            Phase::UnderConstruction => "under_construction",
            Phase::Frozen => "frozen",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative description of the graph the composition root builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSeed {
    /// Node ids, in the order they are added.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Directed `(from, to)` pairs, in the order they are added.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphSeed {
    pub fn new() -> Self {
        GraphSeed {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(mut self, id: impl Into<String>) -> Self {
        self.nodes.push(id.into());
        self
    }

    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// The four-node diamond: A->B, A->C, B->D, C->D.
    pub fn diamond() -> Self {
        GraphSeed::new()
            .node("A")
            .node("B")
            .node("C")
            .node("D")
            .edge("A", "B")
            .edge("A", "C")
            .edge("B", "D")
            .edge("C", "D")
    }
}

impl Default for GraphSeed {
    fn default() -> Self {
        Self::diamond()
    }
}
