//! Symbol table mapping magnitudes to numeral symbols

use crate::model::Phase;
use serde::Serialize;
use std::collections::BTreeMap;

/// Literal base entries.
pub const BASE_SYMBOLS: [(u32, &str); 7] = [
    (1, "I"),
    (5, "V"),
    (10, "X"),
    (50, "L"),
    (100, "C"),
    (500, "D"),
    (1000, "M"),
];

/// Bases that get subtractive compounds (`b*4` and `b*9`).
pub const SUBTRACTIVE_BASES: [u32; 3] = [1, 10, 100];

/// Read-only magnitude to symbol table. Iterates in ascending magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: BTreeMap<u32, String>,
}

impl SymbolTable {
    /// The full table: bases plus subtractive compounds.
    pub fn standard() -> Self {
        SymbolTableBuilder::new()
            .insert_bases()
            .derive_subtractive()
            .build()
    }

    /// Look up a symbol by magnitude. Unknown magnitudes give `None`.
    pub fn lookup(&self, magnitude: u32) -> Option<&str> {
        self.symbols.get(&magnitude).map(String::as_str)
    }

    pub fn contains(&self, magnitude: u32) -> bool {
        self.symbols.contains_key(&magnitude)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.symbols.iter().map(|(m, s)| (*m, s.as_str()))
    }

    pub fn phase(&self) -> Phase {
        Phase::Frozen
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builds a [`SymbolTable`] in two steps: literal bases, then compounds.
#[derive(Debug, Clone)]
pub struct SymbolTableBuilder {
    symbols: BTreeMap<u32, String>,
    phase: Phase,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        SymbolTableBuilder {
            symbols: BTreeMap::new(),
            phase: Phase::Empty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Insert the seven literal bases.
    pub fn insert_bases(mut self) -> Self {
        self.phase = Phase::UnderConstruction;
        for (magnitude, symbol) in BASE_SYMBOLS {
            self.symbols.insert(magnitude, symbol.to_string());
        }
        self
    }

    /// Derive `b*4 = sym(b) + sym(b*5)` and `b*9 = sym(b) + sym(b*10)` for
    /// every subtractive base. A compound whose parts are missing is skipped.
    pub fn derive_subtractive(mut self) -> Self {
        self.phase = Phase::UnderConstruction;
        let compounds: Vec<(u32, String)> = SUBTRACTIVE_BASES
            .iter()
            .flat_map(|&base| [(base, 4, 5), (base, 9, 10)])
            .filter_map(|(base, factor, upper_factor)| {
                let magnitude = base * factor;
                let upper = base * upper_factor;
                match (self.symbols.get(&base), self.symbols.get(&upper)) {
                    (Some(low), Some(high)) => Some((magnitude, format!("{low}{high}"))),
                    _ => {
                        tracing::warn!(
                            "Missing base symbol for {} or {}, skipping {}",
                            base,
                            upper,
                            magnitude
                        );
                        None
                    }
                }
            })
            .collect();

        for (magnitude, symbol) in compounds {
            self.symbols.insert(magnitude, symbol);
        }
        self
    }

    pub fn build(self) -> SymbolTable {
        tracing::debug!("Symbol table frozen with {} entries", self.symbols.len());
        SymbolTable {
            symbols: self.symbols,
        }
    }
}

impl Default for SymbolTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
