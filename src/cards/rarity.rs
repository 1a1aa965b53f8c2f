//! Card rarity tiers.

use serde::{Deserialize, Serialize};

/// Rarity printed on a card.
///
/// Ordered from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
    #[serde(rename = "Secret Rare")]
    SecretRare,
}

impl Rarity {
    /// Printed label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::SecretRare => "Secret Rare",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
