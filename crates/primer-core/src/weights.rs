//! Per-node weights derived from out-degree

use crate::graph::FrozenGraph;
use serde::Serialize;
use std::collections::HashMap;

/// Weight contributed by each outgoing edge.
pub const WEIGHT_PER_EDGE: u64 = 10;

/// Node id to derived weight. Built once by [`derive_weights`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeightMap {
    weights: HashMap<String, u64>,
}

impl WeightMap {
    pub fn get(&self, id: &str) -> Option<u64> {
        self.weights.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(id, weight)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.weights.iter().map(|(id, w)| (id.as_str(), *w))
    }

    /// Pairs sorted by id, for stable display.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

/// Weight every node of a finished graph: out-degree times [`WEIGHT_PER_EDGE`].
///
/// Edges to ids that were never added as nodes still count toward the
/// source's weight. Sources that are not nodes get no entry.
pub fn derive_weights(graph: &FrozenGraph) -> WeightMap {
    let weights: HashMap<String, u64> = graph
        .nodes()
        .map(|node| {
            let weight = graph.out_degree(&node.id) as u64 * WEIGHT_PER_EDGE;
            (node.id.clone(), weight)
        })
        .collect();

    tracing::debug!("Derived weights for {} nodes", weights.len());
    WeightMap { weights }
}
