//! Normalised creature data consumed by the derivation pipeline.
//!
//! Upstream payloads are converted into these types by the provider, so the
//! pipeline never sees wire formats.

use serde::{Deserialize, Serialize};

use super::names::move_display_name;

/// Learn method that marks a move as learnable by levelling up.
pub const LEVEL_UP: &str = "level-up";

/// One entry of a creature's move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureMove {
    /// Upstream slug (e.g. `thunder-shock`).
    pub name: String,

    /// Source URL for the full move info.
    pub url: String,

    /// Learn method per version group, in upstream order.
    pub learn_methods: Vec<String>,
}

impl CreatureMove {
    /// Create a move entry.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            learn_methods: Vec::new(),
        }
    }

    /// Add a learn method (builder pattern).
    #[must_use]
    pub fn learned_by(mut self, method: impl Into<String>) -> Self {
        self.learn_methods.push(method.into());
        self
    }

    /// Card-facing name: hyphens to spaces, title case.
    #[must_use]
    pub fn display_name(&self) -> String {
        move_display_name(&self.name)
    }

    /// Learnable by level-up in at least one version group.
    #[must_use]
    pub fn is_level_up(&self) -> bool {
        self.learn_methods.iter().any(|m| m == LEVEL_UP)
    }
}

/// Normalised creature record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// Upstream identifier, used as the card's collector number.
    pub id: u32,

    /// Display name (capitalised).
    pub name: String,

    /// Categories in slot order. Index 0 is the primary category.
    pub categories: Vec<String>,

    /// Hit-point base stat.
    pub hp: u32,

    /// Sprite URL, if the creature has one.
    pub sprite: Option<String>,

    /// Full move list.
    pub moves: Vec<CreatureMove>,

    /// Sum of all six base stats.
    pub base_stat_total: u32,
}

impl CreatureRecord {
    /// Create a record with no categories, moves, or sprite.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            categories: Vec::new(),
            hp: 0,
            sprite: None,
            moves: Vec::new(),
            base_stat_total: 0,
        }
    }

    /// Add a category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Set hit points and base-stat total.
    #[must_use]
    pub fn with_stats(mut self, hp: u32, base_stat_total: u32) -> Self {
        self.hp = hp;
        self.base_stat_total = base_stat_total;
        self
    }

    /// Set the sprite URL.
    #[must_use]
    pub fn with_sprite(mut self, url: impl Into<String>) -> Self {
        self.sprite = Some(url.into());
        self
    }

    /// Add a move (builder pattern).
    #[must_use]
    pub fn with_move(mut self, mv: CreatureMove) -> Self {
        self.moves.push(mv);
        self
    }

    /// Primary category, if the creature has any.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Moves learnable by level-up.
    pub fn level_up_moves(&self) -> impl Iterator<Item = &CreatureMove> {
        self.moves.iter().filter(|m| m.is_level_up())
    }
}

/// Species flags looked up per creature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub is_legendary: bool,
    pub is_mythical: bool,

    /// Reference (URL) to the creature's generation, used to find its region.
    pub generation_ref: Option<String>,
}

/// Categories that deal double / half damage to a creature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    pub weakness: Vec<String>,
    pub resistance: Vec<String>,
}

/// Resolved info for one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    /// Card-facing name. `None` only when a creature has no moves at all.
    pub name: Option<String>,

    /// Printed power, 0 for status moves.
    pub power: u32,

    /// Category of the move.
    pub category: String,
}

impl MoveInfo {
    /// Create move info.
    pub fn new(name: impl Into<String>, power: u32, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            power,
            category: category.into(),
        }
    }

    /// Placeholder attack for a creature without moves.
    pub fn unnamed(category: impl Into<String>) -> Self {
        Self {
            name: None,
            power: 0,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thunder_shock() -> CreatureMove {
        CreatureMove::new("thunder-shock", "https://pokeapi.co/api/v2/move/84/")
            .learned_by("machine")
            .learned_by(LEVEL_UP)
    }

    #[test]
    fn test_move_display_name() {
        assert_eq!(thunder_shock().display_name(), "Thunder Shock");
    }

    #[test]
    fn test_level_up_in_any_version_group() {
        assert!(thunder_shock().is_level_up());

        let tm_only = CreatureMove::new("toxic", "u").learned_by("machine");
        assert!(!tm_only.is_level_up());

        let no_methods = CreatureMove::new("struggle", "u");
        assert!(!no_methods.is_level_up());
    }

    #[test]
    fn test_creature_builder() {
        let creature = CreatureRecord::new(25, "Pikachu")
            .with_category("Electric")
            .with_stats(35, 320)
            .with_sprite("https://example.com/pikachu.png")
            .with_move(thunder_shock())
            .with_move(CreatureMove::new("pay-day", "u").learned_by("egg"));

        assert_eq!(creature.primary_category(), Some("Electric"));
        assert_eq!(creature.hp, 35);
        assert_eq!(creature.base_stat_total, 320);
        assert_eq!(creature.level_up_moves().count(), 1);
    }

    #[test]
    fn test_no_primary_category() {
        let creature = CreatureRecord::new(0, "Missingno");
        assert_eq!(creature.primary_category(), None);
    }

    #[test]
    fn test_unnamed_move_info() {
        let info = MoveInfo::unnamed("Normal");
        assert_eq!(info.name, None);
        assert_eq!(info.power, 0);
        assert_eq!(info.category, "Normal");
    }
}
