//! PokeAPI wire formats and their conversion into creature records.
//!
//! Only the fields the pipeline needs are decoded; everything else in the
//! upstream payloads is ignored.

use serde::Deserialize;

use crate::core::{Error, Result};
use crate::creature::names::{capitalize, move_display_name, title_case};
use crate::creature::{CreatureMove, CreatureRecord, DamageRelations, MoveInfo, SpeciesInfo};

/// Stat name holding hit points.
const HP_STAT: &str = "hp";

/// `{ "name": ..., "url": ... }` reference.
#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VersionGroupDetail {
    pub move_learn_method: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub mv: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// `/pokemon/{id}/`
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl TryFrom<PokemonPayload> for CreatureRecord {
    type Error = Error;

    fn try_from(p: PokemonPayload) -> Result<Self> {
        let hp = p
            .stats
            .iter()
            .find(|s| s.stat.name == HP_STAT)
            .map(|s| s.base_stat)
            .ok_or_else(|| Error::Lookup(format!("{} has no hp stat", p.name)))?;

        let moves = p
            .moves
            .into_iter()
            .map(|slot| CreatureMove {
                name: slot.mv.name,
                url: slot.mv.url,
                learn_methods: slot
                    .version_group_details
                    .into_iter()
                    .map(|d| d.move_learn_method.name)
                    .collect(),
            })
            .collect();

        Ok(CreatureRecord {
            id: p.id,
            name: capitalize(&p.name),
            categories: p.types.iter().map(|t| title_case(&t.kind.name)).collect(),
            hp,
            sprite: p.sprites.front_default,
            moves,
            base_stat_total: p.stats.iter().map(|s| s.base_stat).sum(),
        })
    }
}

/// `/move/{id}/`
#[derive(Clone, Debug, Deserialize)]
pub struct MovePayload {
    pub name: String,
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl From<MovePayload> for MoveInfo {
    fn from(m: MovePayload) -> Self {
        MoveInfo::new(
            move_display_name(&m.name),
            m.power.unwrap_or(0),
            title_case(&m.kind.name),
        )
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DamageRelationsPayload {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
}

/// `/type/{name}/`
#[derive(Clone, Debug, Deserialize)]
pub struct TypePayload {
    pub damage_relations: DamageRelationsPayload,
}

impl From<TypePayload> for DamageRelations {
    fn from(t: TypePayload) -> Self {
        let names = |list: Vec<NamedResource>| -> Vec<String> {
            list.iter().map(|r| title_case(&r.name)).collect()
        };
        DamageRelations {
            weakness: names(t.damage_relations.double_damage_from),
            resistance: names(t.damage_relations.half_damage_from),
        }
    }
}

/// `/pokemon-species/{id}/`
#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesPayload {
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub generation: Option<NamedResource>,
}

impl From<SpeciesPayload> for SpeciesInfo {
    fn from(s: SpeciesPayload) -> Self {
        SpeciesInfo {
            is_legendary: s.is_legendary,
            is_mythical: s.is_mythical,
            generation_ref: s.generation.map(|g| g.url).filter(|url| !url.is_empty()),
        }
    }
}

/// `/generation/{id}/`
#[derive(Clone, Debug, Deserialize)]
pub struct GenerationPayload {
    pub main_region: Option<NamedResource>,
}

impl GenerationPayload {
    /// Region name, empty if the generation has none.
    #[must_use]
    pub fn region_name(self) -> String {
        self.main_region.map(|r| r.name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack"}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense"}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack"}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed"}}
        ],
        "sprites": {"front_default": "https://example.com/pikachu.png", "back_default": null},
        "moves": [
            {
                "move": {"name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/"},
                "version_group_details": [
                    {"level_learned_at": 1, "move_learn_method": {"name": "level-up"}}
                ]
            },
            {
                "move": {"name": "thunder", "url": "https://pokeapi.co/api/v2/move/87/"},
                "version_group_details": [{"move_learn_method": {"name": "machine"}}]
            }
        ],
        "weight": 60
    }"#;

    #[test]
    fn test_pokemon_payload_to_record() {
        let payload: PokemonPayload = serde_json::from_str(PIKACHU).unwrap();
        let record = CreatureRecord::try_from(payload).unwrap();

        assert_eq!(record.id, 25);
        assert_eq!(record.name, "Pikachu");
        assert_eq!(record.categories, vec!["Electric".to_string()]);
        assert_eq!(record.hp, 35);
        assert_eq!(record.base_stat_total, 320);
        assert_eq!(record.sprite.as_deref(), Some("https://example.com/pikachu.png"));
        assert_eq!(record.moves.len(), 2);
        assert!(record.moves[0].is_level_up());
        assert!(!record.moves[1].is_level_up());
        assert_eq!(record.moves[0].url, "https://pokeapi.co/api/v2/move/84/");
    }

    #[test]
    fn test_missing_hp_stat() {
        let payload: PokemonPayload =
            serde_json::from_str(r#"{"id": 1, "name": "odd", "stats": []}"#).unwrap();
        assert!(matches!(CreatureRecord::try_from(payload), Err(Error::Lookup(_))));
    }

    #[test]
    fn test_missing_sprite() {
        let payload: PokemonPayload = serde_json::from_str(
            r#"{"id": 1, "name": "odd", "stats": [{"base_stat": 5, "stat": {"name": "hp"}}],
                "sprites": {"front_default": null}}"#,
        )
        .unwrap();
        let record = CreatureRecord::try_from(payload).unwrap();
        assert_eq!(record.sprite, None);
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_move_payload() {
        let payload: MovePayload = serde_json::from_str(
            r#"{"name": "thunder-shock", "power": 40, "type": {"name": "electric"}}"#,
        )
        .unwrap();
        assert_eq!(MoveInfo::from(payload), MoveInfo::new("Thunder Shock", 40, "Electric"));
    }

    #[test]
    fn test_move_without_power() {
        let payload: MovePayload =
            serde_json::from_str(r#"{"name": "growl", "power": null, "type": {"name": "normal"}}"#)
                .unwrap();
        assert_eq!(MoveInfo::from(payload).power, 0);
    }

    #[test]
    fn test_type_payload() {
        let payload: TypePayload = serde_json::from_str(
            r#"{"damage_relations": {
                "double_damage_from": [{"name": "ground", "url": ""}],
                "half_damage_from": [{"name": "flying", "url": ""}, {"name": "steel", "url": ""}],
                "no_damage_from": []
            }}"#,
        )
        .unwrap();
        let relations = DamageRelations::from(payload);
        assert_eq!(relations.weakness, vec!["Ground".to_string()]);
        assert_eq!(relations.resistance, vec!["Flying".to_string(), "Steel".to_string()]);
    }

    #[test]
    fn test_species_payload() {
        let payload: SpeciesPayload = serde_json::from_str(
            r#"{"is_legendary": false, "is_mythical": true,
                "generation": {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"}}"#,
        )
        .unwrap();
        let info = SpeciesInfo::from(payload);
        assert!(info.is_mythical);
        assert!(!info.is_legendary);
        assert_eq!(info.generation_ref.as_deref(), Some("https://pokeapi.co/api/v2/generation/1/"));
    }

    #[test]
    fn test_species_without_generation() {
        let payload: SpeciesPayload = serde_json::from_str(r#"{"generation": null}"#).unwrap();
        assert_eq!(SpeciesInfo::from(payload), SpeciesInfo::default());
    }

    #[test]
    fn test_generation_region() {
        let with: GenerationPayload =
            serde_json::from_str(r#"{"main_region": {"name": "kanto", "url": ""}}"#).unwrap();
        assert_eq!(with.region_name(), "kanto");

        let without: GenerationPayload = serde_json::from_str(r#"{"main_region": null}"#).unwrap();
        assert_eq!(without.region_name(), "");
    }
}
