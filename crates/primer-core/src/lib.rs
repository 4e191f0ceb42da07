//! Primer Core — graph store, derived weights, symbol table and the
//! pipeline that builds and publishes them

pub mod graph;
pub mod model;
pub mod pipeline;
pub mod publish;
pub mod symbols;
pub mod weights;


pub use graph::{FrozenGraph, GraphStore};
pub use model::{GraphSeed, Node, Phase};
pub use pipeline::{InitState, build_graph, build_state, build_symbols};
pub use publish::{PublishError, StateCell};
pub use symbols::{BASE_SYMBOLS, SUBTRACTIVE_BASES, SymbolTable, SymbolTableBuilder};
pub use weights::{WEIGHT_PER_EDGE, WeightMap, derive_weights};
