//! Raw and resolved rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::cell::CellEntry;

/// A row as supplied by the caller: column key to raw value(s).
pub type RawRow = Map<String, Value>;

/// A row whose cells have all been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRow {
    /// Position of the row in the source data.
    pub index: usize,
    /// Cells keyed by column, in declared column order. Omitted values have no entry.
    pub cells: IndexMap<String, CellEntry>,
}

impl ResolvedRow {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellEntry> {
        self.cells.get(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
