//! Card records - the value objects stored in the catalog.
//!
//! A `CardRecord` is what the derivation pipeline produces and what the
//! store persists. It carries two attack slots; generated cards fill only
//! the first.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::rarity::Rarity;

/// Energy symbols paid for an attack.
pub type CostSymbols = SmallVec<[String; 4]>;

/// Category used when a creature has none.
pub const DEFAULT_CATEGORY: &str = "Colorless";

/// One attack slot. All fields are `None` for an empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: Option<String>,
    pub damage: Option<u32>,
    pub cost: Option<CostSymbols>,
}

impl Attack {
    /// Create a populated attack slot.
    pub fn new(name: Option<String>, damage: u32, cost: CostSymbols) -> Self {
        Self {
            name,
            damage: Some(damage),
            cost: Some(cost),
        }
    }

    /// An empty slot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if all fields are unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.damage.is_none() && self.cost.is_none()
    }
}

/// A catalog card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub rarity: Rarity,

    /// Primary category (`Colorless` if none).
    #[serde(rename = "type")]
    pub category: String,

    pub hp: u32,

    /// Region name or `Unknown`.
    pub set_code: String,

    /// Upstream creature identifier.
    pub collector_number: u32,

    pub description: Option<String>,

    /// Two attack slots.
    pub attacks: [Attack; 2],

    pub weakness: Vec<String>,
    pub resistance: Vec<String>,
    pub retreat_cost: u32,
    pub image_url: Option<String>,
}

impl CardRecord {
    /// Create a card with default fields: Common, Colorless, no attacks,
    /// retreat cost 1.
    pub fn new(name: impl Into<String>, collector_number: u32) -> Self {
        Self {
            name: name.into(),
            rarity: Rarity::Common,
            category: DEFAULT_CATEGORY.to_string(),
            hp: 0,
            set_code: "Unknown".to_string(),
            collector_number,
            description: None,
            attacks: [Attack::empty(), Attack::empty()],
            weakness: Vec::new(),
            resistance: Vec::new(),
            retreat_cost: 1,
            image_url: None,
        }
    }

    /// The first attack slot.
    #[must_use]
    pub fn primary_attack(&self) -> &Attack {
        &self.attacks[0]
    }
}

/// Partial update for a stored card. `None` leaves a field unchanged.
///
/// The optional card fields take `Some(None)` to clear them; in JSON that is
/// an explicit `null`, while a missing key leaves the field alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardPatch {
    pub name: Option<String>,
    pub rarity: Option<Rarity>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub hp: Option<u32>,
    pub set_code: Option<String>,
    pub collector_number: Option<u32>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub attacks: Option<[Attack; 2]>,
    pub weakness: Option<Vec<String>>,
    pub resistance: Option<Vec<String>>,
    pub retreat_cost: Option<u32>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

/// A present key, even `null`, becomes `Some`; `#[serde(default)]` covers
/// the missing key.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CardPatch {
    /// Apply set fields to a card.
    pub fn apply(self, card: &mut CardRecord) {
        if let Some(v) = self.name {
            card.name = v;
        }
        if let Some(v) = self.rarity {
            card.rarity = v;
        }
        if let Some(v) = self.category {
            card.category = v;
        }
        if let Some(v) = self.hp {
            card.hp = v;
        }
        if let Some(v) = self.set_code {
            card.set_code = v;
        }
        if let Some(v) = self.collector_number {
            card.collector_number = v;
        }
        if let Some(v) = self.description {
            card.description = v;
        }
        if let Some(v) = self.attacks {
            card.attacks = v;
        }
        if let Some(v) = self.weakness {
            card.weakness = v;
        }
        if let Some(v) = self.resistance {
            card.resistance = v;
        }
        if let Some(v) = self.retreat_cost {
            card.retreat_cost = v;
        }
        if let Some(v) = self.image_url {
            card.image_url = v;
        }
    }
}
