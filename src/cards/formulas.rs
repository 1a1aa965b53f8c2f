//! Deterministic stat formulas.
//!
//! All rounding is "round up, minimum 1" so a card never has a free attack
//! or a free retreat.

use crate::creature::names::title_case;
use crate::creature::SpeciesInfo;
use crate::tables::EnergyTable;

use super::rarity::Rarity;
use super::record::CostSymbols;

/// Damage points paid for by one energy.
pub const DAMAGE_PER_ENERGY: u32 = 20;

/// Hit points per point of retreat cost.
pub const HP_PER_RETREAT: u32 = 60;

/// Base-stat total needed for `Rare`.
pub const RARE_STAT_TOTAL: u32 = 550;

/// Base-stat total needed for `Uncommon`.
pub const UNCOMMON_STAT_TOTAL: u32 = 400;

/// Set code used when a creature's region is unknown.
pub const UNKNOWN_SET: &str = "Unknown";

/// Printed damage for a move's power. Power maps 1:1.
#[must_use]
pub const fn damage_for_power(power: u32) -> u32 {
    power
}

/// Energy count for an attack: `max(1, ceil(damage / 20))`.
#[must_use]
pub const fn cost_count(damage: u32) -> u32 {
    let count = damage.div_ceil(DAMAGE_PER_ENERGY);
    if count == 0 {
        1
    } else {
        count
    }
}

/// Energy symbols for an attack costing `count`.
///
/// Prints `count - 1` symbols of the category's energy: the first energy of
/// every attack is implied.
#[must_use]
pub fn cost_symbols(count: u32, category: &str, energy: &EnergyTable) -> CostSymbols {
    let symbol = energy.symbol_for(category);
    (1..count).map(|_| symbol.to_string()).collect()
}

/// Retreat cost: `max(1, ceil(hp / 60))`.
#[must_use]
pub const fn retreat_cost(hp: u32) -> u32 {
    let cost = hp.div_ceil(HP_PER_RETREAT);
    if cost == 0 {
        1
    } else {
        cost
    }
}

/// Rarity from species flags, then base-stat total. First match wins.
#[must_use]
pub fn rarity(species: &SpeciesInfo, base_stat_total: u32) -> Rarity {
    if species.is_mythical {
        Rarity::SecretRare
    } else if species.is_legendary {
        Rarity::UltraRare
    } else if base_stat_total >= RARE_STAT_TOTAL {
        Rarity::Rare
    } else if base_stat_total >= UNCOMMON_STAT_TOTAL {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Set code from a resolved region name.
#[must_use]
pub fn set_code(region: &str) -> String {
    if region.trim().is_empty() {
        UNKNOWN_SET.to_string()
    } else {
        title_case(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(legendary: bool, mythical: bool) -> SpeciesInfo {
        SpeciesInfo {
            is_legendary: legendary,
            is_mythical: mythical,
            generation_ref: None,
        }
    }

    #[test]
    fn test_damage_is_power() {
        assert_eq!(damage_for_power(40), 40);
        assert_eq!(damage_for_power(0), 0);
        assert_eq!(damage_for_power(100), 100);
    }

    #[test]
    fn test_cost_count() {
        assert_eq!(cost_count(0), 1);
        assert_eq!(cost_count(10), 1);
        assert_eq!(cost_count(20), 1);
        assert_eq!(cost_count(21), 2);
        assert_eq!(cost_count(40), 2);
        assert_eq!(cost_count(60), 3);
        assert_eq!(cost_count(250), 13);
    }

    #[test]
    fn test_cost_symbols_one_less_than_count() {
        let energy = EnergyTable::default();

        let electric = cost_symbols(2, "Electric", &energy);
        assert_eq!(electric.as_slice(), ["lightning".to_string()]);

        let fire = cost_symbols(3, "fire", &energy);
        assert_eq!(fire.len(), 2);
        assert!(fire.iter().all(|s| s == "fire"));

        let unknown = cost_symbols(2, "unknown", &energy);
        assert_eq!(unknown.as_slice(), ["colorless".to_string()]);

        assert!(cost_symbols(1, "Electric", &energy).is_empty());
        assert!(cost_symbols(0, "Electric", &energy).is_empty());
    }

    #[test]
    fn test_retreat_cost() {
        assert_eq!(retreat_cost(0), 1);
        assert_eq!(retreat_cost(10), 1);
        assert_eq!(retreat_cost(35), 1);
        assert_eq!(retreat_cost(60), 1);
        assert_eq!(retreat_cost(61), 2);
        assert_eq!(retreat_cost(91), 2);
        assert_eq!(retreat_cost(120), 2);
        assert_eq!(retreat_cost(255), 5);
    }

    #[test]
    fn test_rarity_thresholds() {
        let plain = species(false, false);
        assert_eq!(rarity(&plain, 320), Rarity::Common);
        assert_eq!(rarity(&plain, 399), Rarity::Common);
        assert_eq!(rarity(&plain, 400), Rarity::Uncommon);
        assert_eq!(rarity(&plain, 534), Rarity::Uncommon);
        assert_eq!(rarity(&plain, 550), Rarity::Rare);
        assert_eq!(rarity(&plain, 600), Rarity::Rare);
    }

    #[test]
    fn test_rarity_flags_dominate() {
        assert_eq!(rarity(&species(false, true), 0), Rarity::SecretRare);
        assert_eq!(rarity(&species(true, true), 680), Rarity::SecretRare);
        assert_eq!(rarity(&species(true, false), 0), Rarity::UltraRare);
        assert_eq!(rarity(&species(true, false), 680), Rarity::UltraRare);
    }

    #[test]
    fn test_set_code() {
        assert_eq!(set_code("kanto"), "Kanto");
        assert_eq!(set_code("KANTO"), "Kanto");
        assert_eq!(set_code("new region"), "New Region");
        assert_eq!(set_code(""), "Unknown");
        assert_eq!(set_code("  "), "Unknown");
    }
}
