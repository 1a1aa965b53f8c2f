//! Forced attack moves for specific creatures.
//!
//! Some creatures' signature moves would never win on power (status moves,
//! variable-power moves). The override table pins those creatures to a named
//! move instead of the strongest level-up move.

use rustc_hash::FxHashMap;

use crate::core::Result;

use super::parse_lowercase_map;

const EMBEDDED: &str = include_str!("data/move_overrides.json");

/// Creature name -> forced move display name.
#[derive(Clone, Debug)]
pub struct MoveOverrides {
    moves: FxHashMap<String, String>,
}

impl MoveOverrides {
    /// Parse overrides from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            moves: parse_lowercase_map(json)?,
        })
    }

    /// A table without overrides.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            moves: FxHashMap::default(),
        }
    }

    /// Add an override (builder pattern).
    #[must_use]
    pub fn with(mut self, creature: &str, move_name: impl Into<String>) -> Self {
        self.moves.insert(creature.to_lowercase(), move_name.into());
        self
    }

    /// Forced move for a creature, matched case-insensitively.
    #[must_use]
    pub fn get(&self, creature: &str) -> Option<&str> {
        self.moves.get(&creature.to_lowercase()).map(String::as_str)
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for MoveOverrides {
    /// The embedded table.
    fn default() -> Self {
        Self::from_json(EMBEDDED).unwrap_or_else(|_| Self::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_overrides_parse() {
        let table = MoveOverrides::from_json(EMBEDDED).unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.get("smeargle"), Some("Sketch"));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let table = MoveOverrides::empty().with("Pikachu", "Thunderbolt");
        assert_eq!(table.get("pikachu"), Some("Thunderbolt"));
        assert_eq!(table.get("PIKACHU"), Some("Thunderbolt"));
        assert_eq!(table.get("raichu"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = MoveOverrides::empty();
        assert_eq!(table.len(), 0);
        assert_eq!(table.get("ditto"), None);
    }
}
