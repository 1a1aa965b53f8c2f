//! Property tests for the card formulas.
//!
//! Invariants:
//! - Cost count is `max(1, ceil(damage / 20))` and never zero
//! - Exactly `cost_count - 1` symbols are printed
//! - Retreat cost is `max(1, ceil(hp / 60))` and never zero
//! - Mythical and legendary flags dominate the stat total

use proptest::prelude::*;

use tcg_catalog::cards::formulas::{cost_count, cost_symbols, rarity, retreat_cost};
use tcg_catalog::cards::Rarity;
use tcg_catalog::creature::SpeciesInfo;
use tcg_catalog::tables::EnergyTable;

fn species(legendary: bool, mythical: bool) -> SpeciesInfo {
    SpeciesInfo {
        is_legendary: legendary,
        is_mythical: mythical,
        generation_ref: None,
    }
}

proptest! {
    #[test]
    fn test_cost_count_matches_formula(damage in 0u32..10_000) {
        let expected = std::cmp::max(1, (damage + 19) / 20);
        prop_assert_eq!(cost_count(damage), expected);
        prop_assert!(cost_count(damage) >= 1);
    }

    #[test]
    fn test_symbol_count_is_one_less(damage in 0u32..1_000, category in "[A-Za-z]{0,10}") {
        let energy = EnergyTable::default();
        let count = cost_count(damage);
        let symbols = cost_symbols(count, &category, &energy);
        prop_assert_eq!(symbols.len() as u32, count - 1);

        let symbol = energy.symbol_for(&category);
        prop_assert!(symbols.iter().all(|s| s == symbol));
    }

    #[test]
    fn test_retreat_matches_formula(hp in 0u32..10_000) {
        let expected = std::cmp::max(1, (hp + 59) / 60);
        prop_assert_eq!(retreat_cost(hp), expected);
    }

    #[test]
    fn test_retreat_monotonic(a in 0u32..5_000, b in 0u32..5_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(retreat_cost(low) <= retreat_cost(high));
    }

    #[test]
    fn test_mythical_always_secret_rare(total in any::<u32>(), legendary in any::<bool>()) {
        prop_assert_eq!(rarity(&species(legendary, true), total), Rarity::SecretRare);
    }

    #[test]
    fn test_legendary_always_ultra_rare(total in any::<u32>()) {
        prop_assert_eq!(rarity(&species(true, false), total), Rarity::UltraRare);
    }

    #[test]
    fn test_unflagged_rarity_by_total(total in 0u32..1_000) {
        let expected = if total >= 550 {
            Rarity::Rare
        } else if total >= 400 {
            Rarity::Uncommon
        } else {
            Rarity::Common
        };
        prop_assert_eq!(rarity(&species(false, false), total), expected);
    }
}
