//! Category to energy-symbol table.

use rustc_hash::FxHashMap;

use crate::core::Result;

use super::parse_lowercase_map;

/// Symbol used for categories missing from the table.
pub const DEFAULT_ENERGY: &str = "colorless";

const EMBEDDED: &str = include_str!("data/energy_map.json");

/// Maps a category to the energy symbol printed in attack costs.
#[derive(Clone, Debug)]
pub struct EnergyTable {
    symbols: FxHashMap<String, String>,
}

impl EnergyTable {
    /// Parse a table from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            symbols: parse_lowercase_map(json)?,
        })
    }

    /// Energy symbol for a category, `colorless` if unmapped.
    #[must_use]
    pub fn symbol_for(&self, category: &str) -> &str {
        self.symbols
            .get(&category.to_lowercase())
            .map_or(DEFAULT_ENERGY, String::as_str)
    }

    /// Number of mapped categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for EnergyTable {
    /// The embedded table.
    fn default() -> Self {
        Self::from_json(EMBEDDED).unwrap_or_else(|_| Self {
            symbols: FxHashMap::default(),
        })
    }
}
