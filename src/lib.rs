//! # tcg-catalog
//!
//! A trading-card catalog whose cards are derived from a creature database.
//!
//! ## Design Principles
//!
//! 1. **Pure Derivation**: A card is a deterministic function of one creature
//!    snapshot and its lookups. Nothing is stored while deriving.
//!
//! 2. **Injected Collaborators**: The creature source (`CreatureProvider`) and
//!    storage (`CatalogStore`) are trait seams. Tests and offline runs use
//!    in-memory implementations; production uses the HTTP client.
//!
//! 3. **Bounded Caching**: Upstream lookups go through an explicit
//!    `LookupCache` with an entry limit and optional TTL.
//!
//! ## Modules
//!
//! - `core`: IDs, errors, configuration, logging setup
//! - `creature`: Normalized creature records and the provider trait
//! - `tables`: Static move-override and energy tables
//! - `cards`: Card records, formulas and the derivation pipeline
//! - `pokeapi`: HTTP provider for PokeAPI-shaped databases
//! - `catalog`: Storage, listings, decks and bulk import

pub mod core;
pub mod creature;
pub mod tables;
pub mod cards;
pub mod pokeapi;
pub mod catalog;

// Re-export commonly used types
pub use crate::core::{CardId, CatalogConfig, DeckId, Error, Result};

pub use crate::creature::{
    CreatureMove, CreatureProvider, CreatureRecord, DamageRelations, InMemoryProvider, MoveInfo,
    SpeciesInfo,
};

pub use crate::tables::{EnergyTable, MoveOverrides, Tables};

pub use crate::cards::{Attack, CardPatch, CardPipeline, CardRecord, Rarity};

pub use crate::pokeapi::{LookupCache, PokeApiClient};

pub use crate::catalog::{
    CardQuery, Catalog, CatalogStore, Deck, MemoryStore, Page, Pagination, StoredCard,
};
