//! Creature provider trait.
//!
//! The pipeline reads all upstream data through `CreatureProvider`, so the
//! HTTP client and test fixtures are swapped by construction rather than by
//! inspecting the environment.
//!
//! ## Implementation Notes
//!
//! - `fetch`: Return `Error::CreatureNotFound` for unknown identifiers
//! - Implementations may cache any lookup for as long as they like
//! - No method is retried by the caller

use crate::core::Result;

use super::record::{CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo};

/// Source of creature data for the derivation pipeline.
pub trait CreatureProvider {
    /// Fetch a creature by name or numeric identifier.
    fn fetch(&self, identifier: &str) -> Result<CreatureRecord>;

    /// Weakness/resistance for the creature's primary category.
    ///
    /// Returns empty lists if the creature has no categories.
    fn fetch_damage_relations(&self, creature: &CreatureRecord) -> Result<DamageRelations>;

    /// Species flags and generation reference.
    fn fetch_species_info(&self, creature: &CreatureRecord) -> Result<SpeciesInfo>;

    /// Name, power, and category of the move at `url`.
    fn fetch_move_info(&self, url: &str) -> Result<MoveInfo>;

    /// Region name for a generation reference. May be empty.
    fn fetch_region_name(&self, generation_ref: &str) -> Result<String>;
}

impl<P: CreatureProvider + ?Sized> CreatureProvider for &P {
    fn fetch(&self, identifier: &str) -> Result<CreatureRecord> {
        (**self).fetch(identifier)
    }

    fn fetch_damage_relations(&self, creature: &CreatureRecord) -> Result<DamageRelations> {
        (**self).fetch_damage_relations(creature)
    }

    fn fetch_species_info(&self, creature: &CreatureRecord) -> Result<SpeciesInfo> {
        (**self).fetch_species_info(creature)
    }

    fn fetch_move_info(&self, url: &str) -> Result<MoveInfo> {
        (**self).fetch_move_info(url)
    }

    fn fetch_region_name(&self, generation_ref: &str) -> Result<String> {
        (**self).fetch_region_name(generation_ref)
    }
}
