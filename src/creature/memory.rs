//! In-memory creature provider.
//!
//! Serves pre-loaded records instead of calling the upstream database.
//! Used for offline runs and tests.

use std::cell::Cell;

use rustc_hash::FxHashMap;

use crate::core::{Error, Result};

use super::provider::CreatureProvider;
use super::record::{CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo};

/// Provider backed by in-memory tables.
///
/// ## Example
///
/// ```
/// use tcg_catalog::creature::{CreatureProvider, CreatureRecord, InMemoryProvider, SpeciesInfo};
///
/// let provider = InMemoryProvider::new()
///     .with_creature(CreatureRecord::new(25, "Pikachu"), SpeciesInfo::default());
///
/// assert_eq!(provider.fetch("25").unwrap().name, "Pikachu");
/// assert_eq!(provider.fetch("pikachu").unwrap().id, 25);
/// assert!(provider.fetch("raichu").is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    creatures: FxHashMap<String, CreatureRecord>,
    species: FxHashMap<u32, SpeciesInfo>,
    moves: FxHashMap<String, MoveInfo>,
    relations: FxHashMap<String, DamageRelations>,
    regions: FxHashMap<String, String>,
    move_lookups: Cell<usize>,
}

impl InMemoryProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a creature, reachable by id and by lower-cased name.
    #[must_use]
    pub fn with_creature(mut self, creature: CreatureRecord, species: SpeciesInfo) -> Self {
        self.species.insert(creature.id, species);
        self.creatures.insert(creature.name.to_lowercase(), creature.clone());
        self.creatures.insert(creature.id.to_string(), creature);
        self
    }

    /// Register move info under its source URL.
    #[must_use]
    pub fn with_move(mut self, url: impl Into<String>, info: MoveInfo) -> Self {
        self.moves.insert(url.into(), info);
        self
    }

    /// Register damage relations for a category.
    #[must_use]
    pub fn with_relations(mut self, category: &str, relations: DamageRelations) -> Self {
        self.relations.insert(category.to_lowercase(), relations);
        self
    }

    /// Register the region name for a generation reference.
    #[must_use]
    pub fn with_region(mut self, generation_ref: impl Into<String>, region: impl Into<String>) -> Self {
        self.regions.insert(generation_ref.into(), region.into());
        self
    }

    /// Number of move lookups served so far.
    #[must_use]
    pub fn move_lookups(&self) -> usize {
        self.move_lookups.get()
    }
}

impl CreatureProvider for InMemoryProvider {
    fn fetch(&self, identifier: &str) -> Result<CreatureRecord> {
        self.creatures
            .get(&identifier.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| Error::CreatureNotFound(identifier.to_string()))
    }

    fn fetch_damage_relations(&self, creature: &CreatureRecord) -> Result<DamageRelations> {
        let Some(primary) = creature.primary_category() else {
            return Ok(DamageRelations::default());
        };
        self.relations
            .get(&primary.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::Lookup(format!("no damage relations for category '{primary}'")))
    }

    fn fetch_species_info(&self, creature: &CreatureRecord) -> Result<SpeciesInfo> {
        self.species
            .get(&creature.id)
            .cloned()
            .ok_or_else(|| Error::Lookup(format!("no species info for {}", creature.name)))
    }

    fn fetch_move_info(&self, url: &str) -> Result<MoveInfo> {
        self.move_lookups.set(self.move_lookups.get() + 1);
        self.moves
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Lookup(format!("no move at {url}")))
    }

    fn fetch_region_name(&self, generation_ref: &str) -> Result<String> {
        Ok(self.regions.get(generation_ref).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> InMemoryProvider {
        InMemoryProvider::new()
            .with_creature(
                CreatureRecord::new(25, "Pikachu").with_category("Electric"),
                SpeciesInfo::default(),
            )
            .with_move("m/84", MoveInfo::new("Thunder Shock", 40, "Electric"))
            .with_relations(
                "Electric",
                DamageRelations {
                    weakness: vec!["Ground".into()],
                    resistance: vec!["Electric".into(), "Flying".into(), "Steel".into()],
                },
            )
            .with_region("gen/1", "kanto")
    }

    #[test]
    fn test_fetch_by_id_and_name() {
        let p = provider();
        assert_eq!(p.fetch("25").unwrap().name, "Pikachu");
        assert_eq!(p.fetch("PIKACHU").unwrap().id, 25);
    }

    #[test]
    fn test_unknown_creature_is_not_found() {
        let err = provider().fetch("mew").unwrap_err();
        assert!(matches!(err, Error::CreatureNotFound(ref id) if id == "mew"));
    }

    #[test]
    fn test_relations_case_insensitive() {
        let p = provider();
        let pikachu = p.fetch("25").unwrap();
        let relations = p.fetch_damage_relations(&pikachu).unwrap();
        assert_eq!(relations.weakness, vec!["Ground".to_string()]);
    }

    #[test]
    fn test_relations_empty_without_category() {
        let p = provider();
        let bare = CreatureRecord::new(1, "Bare");
        assert_eq!(p.fetch_damage_relations(&bare).unwrap(), DamageRelations::default());
    }

    #[test]
    fn test_move_lookup_counter() {
        let p = provider();
        assert_eq!(p.move_lookups(), 0);
        assert_eq!(p.fetch_move_info("m/84").unwrap().power, 40);
        assert!(p.fetch_move_info("m/0").is_err());
        assert_eq!(p.move_lookups(), 2);
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let p = provider();
        assert_eq!(p.fetch_region_name("gen/1").unwrap(), "kanto");
        assert_eq!(p.fetch_region_name("gen/9").unwrap(), "");
    }
}
