//! Card derivation pipeline.
//!
//! Turns one `CreatureRecord` into one `CardRecord`:
//!
//! 1. Select the attack (override, else strongest level-up move)
//! 2. Damage and energy cost from the move's power
//! 3. Retreat cost from hit points
//! 4. Rarity from species flags and base-stat total
//! 5. Set code from the species' generation region
//! 6. Weakness/resistance from the primary category
//!
//! Every step reads through the provider and nothing is stored; persisting
//! the card is the caller's job.

use crate::core::{Error, Result};
use crate::creature::{CreatureProvider, CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo};
use crate::tables::{EnergyTable, MoveOverrides, Tables};

use super::formulas;
use super::record::{Attack, CardRecord, DEFAULT_CATEGORY};

/// Derives catalog cards from creature records.
///
/// ## Example
///
/// ```
/// use tcg_catalog::cards::{CardPipeline, Rarity};
/// use tcg_catalog::creature::{CreatureMove, CreatureRecord, InMemoryProvider, MoveInfo, SpeciesInfo};
/// use tcg_catalog::tables::Tables;
///
/// let provider = InMemoryProvider::new()
///     .with_creature(
///         CreatureRecord::new(25, "Pikachu")
///             .with_stats(35, 320)
///             .with_move(CreatureMove::new("thunder-shock", "m/84").learned_by("level-up")),
///         SpeciesInfo::default(),
///     )
///     .with_move("m/84", MoveInfo::new("Thunder Shock", 40, "Electric"));
///
/// let pipeline = CardPipeline::new(provider, Tables::default());
/// let card = pipeline.derive_by_id("25").unwrap();
///
/// assert_eq!(card.rarity, Rarity::Common);
/// assert_eq!(card.retreat_cost, 1);
/// assert_eq!(card.primary_attack().damage, Some(40));
/// ```
#[derive(Clone, Debug)]
pub struct CardPipeline<P> {
    provider: P,
    tables: Tables,
}

impl<P: CreatureProvider> CardPipeline<P> {
    /// Create a pipeline over a provider and static tables.
    pub fn new(provider: P, tables: Tables) -> Self {
        Self { provider, tables }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The energy table.
    pub fn energy(&self) -> &EnergyTable {
        &self.tables.energy
    }

    /// The move override table.
    pub fn overrides(&self) -> &MoveOverrides {
        &self.tables.overrides
    }

    /// Fetch a creature and derive its card.
    pub fn derive_by_id(&self, identifier: &str) -> Result<CardRecord> {
        let creature = self.provider.fetch(identifier)?;
        self.derive(&creature)
    }

    /// Derive a card from a fetched creature.
    pub fn derive(&self, creature: &CreatureRecord) -> Result<CardRecord> {
        let attack = self.select_best_attack(creature)?;
        let damage = formulas::damage_for_power(attack.power);
        let cost_count = formulas::cost_count(damage);
        let category = creature.primary_category().unwrap_or(DEFAULT_CATEGORY);
        let cost = formulas::cost_symbols(cost_count, category, &self.tables.energy);

        let relations = self.damage_relations(creature)?;
        let species = self.provider.fetch_species_info(creature)?;
        let rarity = formulas::rarity(&species, creature.base_stat_total);
        let set_code = self.set_code(&species)?;

        let card = CardRecord {
            name: creature.name.clone(),
            rarity,
            category: category.to_string(),
            hp: creature.hp,
            set_code,
            collector_number: creature.id,
            description: None,
            attacks: [Attack::new(attack.name, damage, cost), Attack::empty()],
            weakness: relations.weakness,
            resistance: relations.resistance,
            retreat_cost: formulas::retreat_cost(creature.hp),
            image_url: creature.sprite.clone(),
        };

        log::debug!(
            "Derived card for {} (#{}): {} {}hp, {:?} {} dmg",
            card.name,
            card.collector_number,
            card.rarity,
            card.hp,
            card.primary_attack().name,
            damage
        );
        Ok(card)
    }

    /// Choose the creature's printed attack.
    ///
    /// An override from the table wins and must exist in the move list.
    /// Otherwise the strongest level-up move is used (all moves if none are
    /// level-up). Ties go to the last move seen.
    pub fn select_best_attack(&self, creature: &CreatureRecord) -> Result<MoveInfo> {
        if let Some(forced) = self.tables.overrides.get(&creature.name) {
            let entry = creature
                .moves
                .iter()
                .find(|m| m.display_name().eq_ignore_ascii_case(forced))
                .ok_or_else(|| Error::OverrideNotFound {
                    creature: creature.name.clone(),
                    move_name: forced.to_string(),
                })?;
            log::debug!("Using override move '{}' for {}", forced, creature.name);
            return self.provider.fetch_move_info(&entry.url);
        }

        let level_up: Vec<_> = creature.level_up_moves().collect();
        let candidates = if level_up.is_empty() {
            creature.moves.iter().collect()
        } else {
            level_up
        };

        // The placeholder has power 0, so any candidate replaces it.
        let mut best =
            MoveInfo::unnamed(creature.primary_category().unwrap_or(DEFAULT_CATEGORY));
        for entry in candidates {
            let info = self.provider.fetch_move_info(&entry.url)?;
            if info.power >= best.power {
                best = info;
            }
        }
        Ok(best)
    }

    fn damage_relations(&self, creature: &CreatureRecord) -> Result<DamageRelations> {
        if creature.primary_category().is_none() {
            return Ok(DamageRelations::default());
        }
        self.provider.fetch_damage_relations(creature)
    }

    fn set_code(&self, species: &SpeciesInfo) -> Result<String> {
        match species.generation_ref.as_deref() {
            Some(generation) if !generation.is_empty() => {
                let region = self.provider.fetch_region_name(generation)?;
                Ok(formulas::set_code(&region))
            }
            _ => Ok(formulas::UNKNOWN_SET.to_string()),
        }
    }
}
