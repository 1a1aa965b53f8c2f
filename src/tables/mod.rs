//! Static lookup tables for card derivation.
//!
//! Both tables are JSON objects loaded once and read-only afterwards.
//! Keys are matched case-insensitively.
//!
//! - `EnergyTable`: category -> energy symbol used in attack costs
//! - `MoveOverrides`: creature name -> forced attack move

pub mod energy;
pub mod overrides;

pub use energy::{EnergyTable, DEFAULT_ENERGY};
pub use overrides::MoveOverrides;

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::core::{Result, TablesConfig};

/// Parse a JSON object of strings into a map with lower-cased keys.
fn parse_lowercase_map(json: &str) -> Result<FxHashMap<String, String>> {
    let raw: FxHashMap<String, String> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect())
}

/// Both tables, loaded together.
#[derive(Clone, Debug, Default)]
pub struct Tables {
    pub energy: EnergyTable,
    pub overrides: MoveOverrides,
}

impl Tables {
    /// Load tables, using configured files where given and the embedded
    /// defaults otherwise.
    pub fn load(config: &TablesConfig) -> Result<Self> {
        let energy = match &config.energy_path {
            Some(path) => EnergyTable::from_json(&read(path)?)?,
            None => EnergyTable::default(),
        };
        let overrides = match &config.overrides_path {
            Some(path) => MoveOverrides::from_json(&read(path)?)?,
            None => MoveOverrides::default(),
        };
        log::debug!(
            "Loaded {} energy mappings and {} move overrides",
            energy.len(),
            overrides.len()
        );
        Ok(Self { energy, overrides })
    }
}

fn read(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
