//! Construction pipeline: graph, weights and symbols built in named steps

use crate::graph::{FrozenGraph, GraphStore};
use crate::model::GraphSeed;
use crate::symbols::SymbolTable;
use crate::weights::{WeightMap, derive_weights};

/// Everything the pipeline produces. Immutable once built.
#[derive(Debug)]
pub struct InitState {
    pub graph: FrozenGraph,
    pub weights: WeightMap,
    pub symbols: SymbolTable,
}

/// Run every construction step for `seed`.
///
/// Steps, in order:
/// 1. `build_graph`: add every seed node, then every seed edge, then freeze.
/// 2. `derive_weights`: weight the frozen graph.
/// 3. `build_symbols`: bases, then subtractive compounds.
///
/// Step 3 does not depend on 1 or 2.
pub fn build_state(seed: &GraphSeed) -> InitState {
    let graph = build_graph(seed);
    let weights = derive_weights(&graph);
    let symbols = build_symbols();

    tracing::info!(
        "Built initial state: {} nodes, {} edges, {} symbols",
        graph.node_count(),
        graph.edge_count(),
        symbols.len()
    );

    InitState {
        graph,
        weights,
        symbols,
    }
}

pub fn build_graph(seed: &GraphSeed) -> FrozenGraph {
    tracing::debug!(
        "Building graph from {} nodes, {} edges",
        seed.nodes.len(),
        seed.edges.len()
    );
    let mut store = GraphStore::new();
    for id in &seed.nodes {
        store.add_node(id);
    }
    for (from, to) in &seed.edges {
        store.add_edge(from, to);
    }
    store.freeze()
}

pub fn build_symbols() -> SymbolTable {
    tracing::debug!("Building symbol table");
    SymbolTable::standard()
}
